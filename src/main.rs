//
// Copyright (c) Denis Kotov. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

use clap::{App, AppSettings, ArgMatches, SubCommand};
use dotenv::dotenv;
use env_logger::Builder;
use log::Record;
use sheet_grid::{sheet_for_point, Scale};
use sheetsplit_core::config::DEFAULT_CONFIG;
use sheetsplit_core::Error;
use std::env;
use std::io::Write;
use std::process;
use time;

#[cfg(feature = "with-gdal")]
use sheetsplit_core::config::{read_config, ApplicationCfg};
#[cfg(feature = "with-gdal")]
use std::path::Path;

fn init_logger(args: &ArgMatches<'_>) {
    let mut builder = Builder::new();
    builder.format(|buf, record: &Record<'_>| {
        let t = time::now();
        writeln!(
            buf,
            "{}.{:03} {} {}",
            time::strftime("%Y-%m-%d %H:%M:%S", &t).unwrap(),
            t.tm_nsec / 1000_000,
            record.level(),
            record.args()
        )
    });

    let rust_log_env = env::var("RUST_LOG");
    let rust_log = if args.value_of("loglevel").is_none() && rust_log_env.is_ok() {
        rust_log_env.as_ref().unwrap()
    } else {
        args.value_of("loglevel").unwrap_or("info")
    };
    builder.parse_filters(rust_log);

    builder.init();
}

fn parse_scale(denom: u32) -> Result<Scale, Error> {
    Scale::from_denominator(denom).map_err(Error::from)
}

fn arg_scale(args: &ArgMatches<'_>) -> Option<u32> {
    args.value_of("scale").map(|s| {
        s.parse::<u32>()
            .expect("Error parsing 'scale' as integer value")
    })
}

#[cfg(feature = "with-gdal")]
fn split(args: &ArgMatches<'_>) -> Result<(), Error> {
    use sheetsplit_gdal::{split_path, SplitStats};

    let config: Option<ApplicationCfg> = match args.value_of("config") {
        Some(path) => Some(read_config(path)?),
        None => None,
    };
    let denom = arg_scale(args)
        .or_else(|| config.as_ref().map(|cfg| cfg.grid.scale))
        .ok_or_else(|| Error::Config("Missing 'scale' argument".to_string()))?;
    let scale = parse_scale(denom)?;
    let out_dir = args
        .value_of("out")
        .map(str::to_string)
        .or_else(|| config.as_ref().map(|cfg| cfg.output.dir.clone()))
        .ok_or_else(|| Error::Config("Missing 'out' argument".to_string()))?;
    let mut sources: Vec<String> = args.value_of("src").map(str::to_string).into_iter().collect();
    if sources.is_empty() {
        if let Some(config) = config.as_ref() {
            sources.extend(config.datasources.iter().map(|ds| ds.path.clone()));
        }
    }
    if sources.is_empty() {
        return Err(Error::Config(
            "Missing 'src' argument or [[datasource]] entry".to_string(),
        ));
    }

    let start = time::precise_time_s();
    let mut total = SplitStats::default();
    for src in &sources {
        let stats = split_path(Path::new(src), scale, Path::new(&out_dir))?;
        total.add(&stats);
    }
    info!(
        "{} features written to {} sheets in {:.2}s",
        total.features,
        total.sheets,
        time::precise_time_s() - start
    );
    Ok(())
}

#[cfg(not(feature = "with-gdal"))]
fn split(_args: &ArgMatches<'_>) -> Result<(), Error> {
    Err(Error::Config("Built without GDAL support".to_string()))
}

#[cfg(feature = "with-gdal")]
fn grid(args: &ArgMatches<'_>) -> Result<(), Error> {
    use sheetsplit_gdal::{write_grid, GdalSource};

    let denom = arg_scale(args).expect("Missing 'scale' argument");
    let scale = parse_scale(denom)?;
    let src = args.value_of("src").expect("Missing 'src' argument");
    let out = args.value_of("out").expect("Missing 'out' argument");
    let cells = write_grid(&GdalSource::new(src), scale, Path::new(out))?;
    info!("{} grid cells written", cells);
    Ok(())
}

#[cfg(not(feature = "with-gdal"))]
fn grid(_args: &ArgMatches<'_>) -> Result<(), Error> {
    Err(Error::Config("Built without GDAL support".to_string()))
}

fn name(args: &ArgMatches<'_>) -> Result<(), Error> {
    let denom = arg_scale(args).expect("Missing 'scale' argument");
    let scale = parse_scale(denom)?;
    let point: Vec<f64> = args
        .value_of("point")
        .map(|numlist| {
            numlist
                .split(',')
                .map(|v| {
                    v.parse()
                        .expect("Error parsing 'point' as pair of float values")
                })
                .collect()
        })
        .expect("Missing 'point' argument");
    if point.len() != 2 {
        return Err(Error::Config("'point' must be lon,lat".to_string()));
    }
    let sheet = sheet_for_point(point[0], point[1], scale);
    println!("{}", sheet.code);
    println!(
        "{} {} {} {}",
        sheet.extent.minx, sheet.extent.miny, sheet.extent.maxx, sheet.extent.maxy
    );
    Ok(())
}

#[cfg(feature = "with-gdal")]
extern crate sheetsplit_gdal;

fn version_info() -> String {
    #[cfg(feature = "with-gdal")]
    let version = format!(
        "{} (GDAL version {})",
        crate_version!(),
        sheetsplit_gdal::gdal_version()
    );
    #[cfg(not(feature = "with-gdal"))]
    let version = crate_version!().to_string();
    version
}

fn main() {
    dotenv().ok();
    let version_info = version_info();
    let mut app = App::new("sheetsplit")
        .version(&version_info as &str)
        .author("Denis Kotov")
        .about("splits vector datasets into nomenklatura map sheets")
        .subcommand(SubCommand::with_name("split")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--scale=[DENOM] 'Scale denominator (1000000, 100000, 50000 or 25000)'
                                              --src=[FILE_OR_DIR] 'Source dataset or directory of shapefiles'
                                              --out=[DIR] 'Existing directory for sheet output'
                                              -c, --config=[FILE] 'Load from custom config file'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Clip a dataset into one directory per sheet"))
        .subcommand(SubCommand::with_name("grid")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--scale=<DENOM> 'Scale denominator (1000000, 100000, 50000 or 25000)'
                                              --src=<FILE> 'Dataset whose extent the grid covers'
                                              --out=<DIR> 'Existing directory for the grid shapefile'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Write the sheet grid covering a dataset as a shapefile"))
        .subcommand(SubCommand::with_name("name")
                        .setting(AppSettings::AllowLeadingHyphen)
                        .args_from_usage("--scale=<DENOM> 'Scale denominator (1000000, 100000, 50000 or 25000)'
                                              --point=<lon,lat> 'Point in WGS84 degrees'
                                              --loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Print sheet code and extent for a point"))
        .subcommand(SubCommand::with_name("genconfig")
                        .args_from_usage("--loglevel=[error|warn|info|debug|trace] 'Log level (Default: info)'")
                        .about("Generate configuration template"));

    match app.get_matches_from_safe_borrow(env::args()) {
        //app.get_matches() prohibits later call of app.print_help()
        Result::Err(e) => {
            println!("{}", e);
        }
        Result::Ok(matches) => match matches.subcommand() {
            ("split", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(err) = split(sub_m) {
                    error!("{}", err);
                    process::exit(1);
                }
            }
            ("grid", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(err) = grid(sub_m) {
                    error!("{}", err);
                    process::exit(1);
                }
            }
            ("name", Some(sub_m)) => {
                init_logger(sub_m);
                if let Err(err) = name(sub_m) {
                    error!("{}", err);
                    process::exit(1);
                }
            }
            ("genconfig", Some(sub_m)) => {
                init_logger(sub_m);
                println!("{}", DEFAULT_CONFIG);
            }
            _ => {
                let _ = app.print_help();
                println!("");
            }
        },
    }
}
