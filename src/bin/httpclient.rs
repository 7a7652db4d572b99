//! Command-line front end: `httpclient [GET/POST] [URL]`.

use std::process::ExitCode;

use clap::Parser;
use log::error;
use microhttp_client::{ClientConfig, FormArgs, HttpClient, HttpResult, Method};

const USAGE: &str = "httpclient [GET/POST] [URL]";

#[derive(Debug, Parser)]
#[command(name = "httpclient", version, about = "Send one GET or POST request over a raw TCP socket")]
struct Cli {
    /// Optional method (GET or POST) followed by the URL
    #[arg(value_name = "[METHOD] URL", num_args = 0..=2)]
    target: Vec<String>,

    /// Form field sent in a POST body, as key=value. May be repeated.
    #[arg(short = 'd', long = "data", value_name = "KEY=VALUE", value_parser = parse_form_field)]
    data: Vec<(String, String)>,

    /// Print the result as JSON instead of plain text
    #[arg(long)]
    json: bool,

    /// Bytes requested per socket read
    #[arg(long, default_value_t = microhttp_client::client::DEFAULT_READ_CHUNK_SIZE)]
    chunk_size: usize,
}

fn parse_form_field(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got {s:?}"))
}

fn print_result(result: &HttpResult, json: bool) -> Result<(), serde_json::Error> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        println!("{}", result.status_code);
        println!("{}", result.header_block);
        println!("{}", result.body);
    }
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let default_method = Method::default().to_string();
    let (method, url) = match cli.target.as_slice() {
        [url] => (&default_method, url),
        [method, url] => (method, url),
        _ => return Err(USAGE.into()),
    };

    let form: FormArgs = cli.data.into_iter().collect();
    let client = HttpClient::new(ClientConfig::default().with_read_chunk_size(cli.chunk_size));

    let result = client.request(method, url, Some(&form))?;
    print_result(&result, cli.json)?;

    Ok(())
}

fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init();

    let cli = Cli::parse();
    if cli.target.is_empty() {
        println!("{USAGE}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
