mod commands;
mod fit;
mod flatten;

use clap::{App, Arg, ArgMatches, SubCommand};
use commands::*;
use log::{debug, error, info};

use std::fs::File;
use std::io::{stdout, Read, Write};
use svgpath::math::{point, Box2D};
use svgpath::path::{ParserOptions, Path, SerializerOptions};

fn main() {
    env_logger::init();

    let matches = app().get_matches();

    if let Err(e) = run(&matches) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("svgpath command-line interface")
        .version("0.3")
        .author("The svgpath developers")
        .about("Parses SVG path data")
        .subcommand(
            SubCommand::with_name("parse")
                .about("Prints the parsed commands, one per line")
                .arg(
                    Arg::with_name("COUNT")
                        .short("c")
                        .long("count")
                        .help("Prints the number of commands, sub-paths and arcs"),
                ),
        )
        .subcommand(
            SubCommand::with_name("flatten")
                .about("Approximates arcs with cubic bézier curves and prints the path")
                .arg(
                    Arg::with_name("RELATIVE")
                        .short("r")
                        .long("relative")
                        .help("Prints relative coordinates"),
                ),
        )
        .subcommand(SubCommand::with_name("bbox").about("Prints the bounding box of the path"))
        .subcommand(
            SubCommand::with_name("fit")
                .about("Scales and translates the path into a rectangle")
                .arg(
                    Arg::with_name("RECT")
                        .long("rect")
                        .help("The destination rectangle")
                        .value_names(&["X", "Y", "WIDTH", "HEIGHT"])
                        .number_of_values(4)
                        .allow_hyphen_values(true)
                        .required(true),
                )
                .arg(
                    Arg::with_name("STYLE")
                        .long("style")
                        .help("How to fit the path (stretch, min, max, horizontal or vertical)")
                        .value_name("STYLE")
                        .takes_value(true)
                        .default_value("min"),
                ),
        )
        .arg(
            Arg::with_name("PATH")
                .value_name("PATH")
                .help("An SVG path")
                .takes_value(true)
                .conflicts_with("INPUT")
                .required(false),
        )
        .arg(
            Arg::with_name("INPUT")
                .help("Sets the input file to use")
                .short("i")
                .long("input")
                .value_name("FILE")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("OUTPUT")
                .help("Sets the output file to use")
                .value_name("FILE")
                .short("o")
                .long("output")
                .takes_value(true)
                .required(false),
        )
        .arg(
            Arg::with_name("NO_INVERT")
                .long("no-invert")
                .help("Keeps SVG's downward y axis"),
        )
        .arg(
            Arg::with_name("IMPLICIT_LINES")
                .long("implicit-lines")
                .help("Treats repeated move-to coordinates as line-to commands"),
        )
}

fn run(matches: &ArgMatches) -> Result<(), CliError> {
    let mut input_buffer = matches.value_of("PATH").unwrap_or("").to_string();

    if let Some(input_file) = matches.value_of("INPUT") {
        info!("reading {}", input_file);
        File::open(input_file)?.read_to_string(&mut input_buffer)?;
    }

    let output: Box<dyn Write> = match matches.value_of("OUTPUT") {
        Some(output_file) => Box::new(File::create(output_file)?),
        None => Box::new(stdout()),
    };

    let invert_y_axis = !matches.is_present("NO_INVERT");
    let options = ParserOptions {
        invert_y_axis,
        implicit_line_to: matches.is_present("IMPLICIT_LINES"),
    };
    debug!("{:?}", options);

    let path = Path::parse_with_options(&input_buffer, &options)?;
    info!("parsed {} commands", path.len());

    if let Some(parse_matches) = matches.subcommand_matches("parse") {
        flatten::parse(ParseCmd {
            path,
            output,
            count: parse_matches.is_present("COUNT"),
        })
    } else if let Some(flatten_matches) = matches.subcommand_matches("flatten") {
        flatten::flatten(FlattenCmd {
            path,
            output,
            serializer: SerializerOptions {
                relative: flatten_matches.is_present("RELATIVE"),
                invert_y_axis,
            },
        })
    } else if matches.subcommand_matches("bbox").is_some() {
        fit::bbox(BoundingBoxCmd { path, output })
    } else if let Some(fit_matches) = matches.subcommand_matches("fit") {
        fit::fit(FitCmd {
            path,
            output,
            rect: get_rect(fit_matches)?,
            style: fit::parse_style(fit_matches.value_of("STYLE").unwrap_or("min"))?,
            serializer: SerializerOptions {
                relative: false,
                invert_y_axis,
            },
        })
    } else {
        flatten::parse(ParseCmd {
            path,
            output,
            count: false,
        })
    }
}

fn get_rect(matches: &ArgMatches) -> Result<Box2D, CliError> {
    let values = matches
        .values_of("RECT")
        .map(|values| {
            values
                .map(|v| {
                    v.parse::<f64>()
                        .map_err(|_| CliError::InvalidArgument(format!("expected a number, got {:?}", v)))
                })
                .collect::<Result<Vec<f64>, CliError>>()
        })
        .unwrap_or_else(|| Ok(Vec::new()))?;

    match values[..] {
        [x, y, w, h] if w >= 0.0 && h >= 0.0 => Ok(Box2D {
            min: point(x, y),
            max: point(x + w, y + h),
        }),
        _ => Err(CliError::InvalidArgument(
            "--rect expects X Y WIDTH HEIGHT with a non-negative size".to_string(),
        )),
    }
}

#[test]
fn path_and_input_file_conflict() {
    assert!(app()
        .get_matches_from_safe(vec!["svgpath", "M 0 0 L 1 1", "-i", "path.txt", "bbox"])
        .is_err());

    let matches = app()
        .get_matches_from_safe(vec!["svgpath", "M 0 0 L 1 1", "bbox"])
        .unwrap();
    assert_eq!(matches.value_of("PATH"), Some("M 0 0 L 1 1"));
    assert!(matches.subcommand_matches("bbox").is_some());

    let matches = app()
        .get_matches_from_safe(vec!["svgpath", "-i", "path.txt", "fit", "--rect", "0", "0", "10", "10"])
        .unwrap();
    assert_eq!(matches.value_of("INPUT"), Some("path.txt"));
    assert!(matches.subcommand_matches("fit").is_some());
}
