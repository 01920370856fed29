
extern crate clap;
extern crate colored;
extern crate gps_ca_code;
extern crate serde_json;

use clap::{Arg, App};
use colored::*;
use gps_ca_code::gnss::gps_l1_ca::CodePreview;

fn parse_usize(opt:Option<&str>, name:&str, default:usize) -> Result<usize, String> {
	match opt {
		Some(s) => s.parse::<usize>().map_err(|_| format!("Unable to parse {} from '{}'", name, s)),
		None    => Ok(default),
	}
}

fn run() -> Result<(), String> {

	let matches = App::new("GPS L1 C/A Code Generator")
		.version("0.1.0")
		.about("Prints the first chips of the GPS L1 C/A Gold code for one or all PRNs")
		.arg(Arg::with_name("prn")
			.short("p").long("prn")
			.help("PRN number from 1 to 32; all PRNs if omitted")
			.takes_value(true))
		.arg(Arg::with_name("num_chips")
			.short("n").long("num_chips")
			.help("Number of chips to print per PRN, default 10")
			.takes_value(true))
		.arg(Arg::with_name("format")
			.short("f").long("format")
			.takes_value(true)
			.possible_values(&["list", "octal", "json"])
			.default_value("list"))
		.get_matches();

	let num_chips:usize = parse_usize(matches.value_of("num_chips"), "num_chips", 10)?;
	let prns:Vec<usize> = match matches.value_of("prn") {
		Some(s) => vec![parse_usize(Some(s), "prn", 0)?],
		None    => (1..=32).collect(),
	};

	eprintln!("{}", format!("Generating {} chips for {} PRN(s)", num_chips, prns.len()).cyan());

	// Build every preview before printing so an invalid PRN leaves stdout empty
	let previews:Vec<CodePreview> = prns.iter()
		.map(|prn| CodePreview::new(*prn, num_chips))
		.collect::<Result<Vec<CodePreview>, _>>()
		.map_err(|e| format!("{}", e))?;

	match matches.value_of("format") {
		Some("octal") => for p in &previews { println!("PRN {:02}: {}", p.prn, p.octal_str()); },
		Some("json")  => println!("{}", serde_json::to_string_pretty(&previews).map_err(|e| format!("{}", e))?),
		_             => for p in &previews { println!("{}", p); },
	}

	Ok(())
}

fn main() {
	if let Err(msg) = run() {
		eprintln!("{}", format!("Error: {}", msg).red());
		std::process::exit(1);
	}
}
