// Command-line interface for marq
//
// This binary provides commands for inspecting and rendering marq files.
//
// The main role for the marq program is to interface with marq content:
// rendering it onto a presentation surface, formatting it, or inspecting the
// front end's intermediate stages. The core capabilities use the marq-render
// crate; this crate is a shell over that library.
//
// Rendering:
//
// The render target is given with --to, or inferred from the -o filename
// extension when --to is omitted.
// Usage:
//  marq <input> --to <surface> [--output <file>]         - Render (default)
//  marq render <input> --to <surface> [--output <file>]  - Same as above (explicit)
//  marq fmt <input>                       - Re-serialize to canonical markup
//  marq inspect <path> [<transform>]      - Execute a transform (defaults to "node-treeviz")
//  marq --list-transforms                 - List available transforms
//
// Extra Parameters:
//
// Surface-specific parameters can be passed using --extra-<parameter-name> <value>.
// The CLI layer strips the "extra-" prefix and passes the parameters to the
// surface/transform.
// Example:
//  marq inspect file.mq node-treeviz --extra-show-index --extra-max-label-length 60

use marq_cli::transforms;

use clap::{Arg, ArgAction, Command, ValueHint};
use marq_config::{HtmlThemeConfig, Loader, MarqConfig};
use marq_render::SurfaceRegistry;
use std::collections::HashMap;
use std::fs;

/// Parse extra-* arguments from command line args
/// Returns (cleaned_args_without_extras, extra_params_map)
///
/// Supports both:
/// - `--extra-<key> <value>` (explicit value)
/// - `--extra-<key>` (boolean flag, defaults to "true")
/// - `--extras-<key>` (alias for `--extra-<key>`)
fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = if let Some(key) = arg.strip_prefix("--extra-") {
            Some(key)
        } else {
            arg.strip_prefix("--extras-")
        };

        if let Some(key) = key_opt {
            // Found an extra-* argument
            // Check if the next arg is a value or another flag/end
            let has_value = if i + 1 < args.len() {
                let next = &args[i + 1];
                !next.starts_with('-') && !next.starts_with("--")
            } else {
                false
            };

            if has_value {
                // Explicit value provided
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2; // Skip both the key and value
            } else {
                // No value, treat as boolean flag (default to "true")
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

fn build_cli() -> Command {
    Command::new("marq")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A tool for inspecting and rendering marq files")
        .long_about(
            "marq is a command-line tool for working with marq markup files.\n\n\
            Commands:\n  \
            - inspect: View internal representations (tokens, node sequence)\n  \
            - render: Project a document onto a presentation surface (html, text, ...)\n  \
            - fmt: Re-serialize a document to canonical markup\n\n\
            Extra Parameters:\n  \
            Use --extra-<name> [value] to pass surface-specific options.\n  \
            Boolean flags can omit the value (defaults to 'true').\n\n\
            Examples:\n  \
            marq inspect file.mq                    # View node tree visualization\n  \
            marq inspect file.mq token-simple       # View the token stream\n  \
            marq file.mq --to html -o out.html      # Render to an HTML file\n  \
            marq file.mq --to text                  # Render plain text to stdout",
        )
        .arg_required_else_help(true)
        .subcommand_required(false)
        .arg(
            Arg::new("list-transforms")
                .long("list-transforms")
                .help("List available transforms")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .help("Path to a marq.toml configuration file")
                .value_hint(ValueHint::FilePath)
                .global(true),
        )
        .subcommand(
            Command::new("inspect")
                .about("Inspect internal representations of marq files")
                .long_about(
                    "View the internal structure of marq files at the two front end stages.\n\n\
                    Transforms (stage-format):\n  \
                    - token-json:    Token stream as JSON\n  \
                    - token-simple:  Plain token kind names\n  \
                    - token-pprint:  Token kind names with literals\n  \
                    - node-json:     Node sequence as JSON\n  \
                    - node-treeviz:  Node tree visualization (default)\n\n\
                    Extra Parameters:\n  \
                    --extra-token-literals false   Hide literals in token-pprint\n  \
                    --extra-show-index             Prefix treeviz lines with ordinals\n  \
                    --extra-max-label-length N     Treeviz label truncation width\n\n\
                    Examples:\n  \
                    marq inspect file.mq                     # Tree visualization (default)\n  \
                    marq inspect file.mq token-json          # View token stream",
                )
                .arg(
                    Arg::new("path")
                        .help("Path to the marq file")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("transform")
                        .help("Transform to apply (stage-format). Defaults to 'node-treeviz'")
                        .required(false)
                        .value_parser(clap::builder::PossibleValuesParser::new(
                            transforms::AVAILABLE_TRANSFORMS,
                        ))
                        .index(2)
                        .value_hint(ValueHint::Other),
                ),
        )
        .subcommand(
            Command::new("render")
                .about("Render a document onto a presentation surface (default command)")
                .long_about(
                    "Project a marq document onto a presentation surface.\n\n\
                    Supported surfaces:\n  \
                    - html:    Self-contained HTML5 with embedded CSS (.html)\n  \
                    - markup:  Canonical marq markup (.mq)\n  \
                    - text:    Plain text with underlined headings (.txt)\n  \
                    - treeviz: Tree visualization\n\n\
                    The target surface is taken from --to, or inferred from the\n\
                    output file extension when --to is omitted.\n\
                    Output goes to stdout by default, or use -o to specify a file.\n\n\
                    Examples:\n  \
                    marq render input.mq --to html -o out.html   # HTML file\n  \
                    marq render input.mq -o out.txt              # Surface inferred: text\n  \
                    marq input.mq --to treeviz                   # 'render' is optional",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target surface (inferred from the output extension if omitted)")
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("output")
                        .long("output")
                        .short('o')
                        .help("Output file path (defaults to stdout)")
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("fmt")
                .about("Format a marq file")
                .long_about(
                    "Re-serialize a marq file into canonical markup.\n\n\
                    This command parses the input and renders it back through the\n\
                    markup surface, normalizing separators and delimiters.\n\n\
                    Output is always written to stdout.\n\n\
                    Examples:\n  \
                    marq fmt input.mq                  # Format to stdout\n  \
                    marq fmt input.mq > formatted.mq   # Redirect to file",
                )
                .arg(
                    Arg::new("input")
                        .help("Input file path")
                        .required(true)
                        .index(1)
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("generate-css")
                .about("Output the default CSS used for HTML export")
                .long_about(
                    "Outputs the baseline CSS used when rendering to HTML.\n\n\
                    Use this as a starting point for custom styling. The output can\n\
                    be saved to a file, customized, then passed via --extra-css to\n\
                    the render command to extend the default styles.\n\n\
                    Examples:\n  \
                    marq generate-css                   # Print CSS to stdout\n  \
                    marq generate-css > custom.css      # Save to file for editing",
                ),
        )
}

fn main() {
    // Try to parse args. If no subcommand is provided, inject "render"
    let args: Vec<String> = std::env::args().collect();

    // Parse extra-* arguments before clap processing
    let (cleaned_args, mut extra_params) = parse_extra_args(&args);

    // First, try normal parsing with cleaned args
    let cli = build_cli();
    let matches = match cli.clone().try_get_matches_from(&cleaned_args) {
        Ok(m) => m,
        Err(e) => {
            // Check if this is a "missing subcommand" error by seeing if the
            // first arg looks like a file
            if cleaned_args.len() > 1
                && !cleaned_args[1].starts_with('-')
                && cleaned_args[1] != "inspect"
                && cleaned_args[1] != "render"
                && cleaned_args[1] != "fmt"
                && cleaned_args[1] != "generate-css"
                && cleaned_args[1] != "help"
            {
                // Inject "render" as the subcommand
                let mut new_args = vec![cleaned_args[0].clone(), "render".to_string()];
                new_args.extend_from_slice(&cleaned_args[1..]);

                // Try parsing again with "render" injected
                match cli.try_get_matches_from(&new_args) {
                    Ok(m) => m,
                    Err(e2) => e2.exit(),
                }
            } else {
                // Not a case where we should inject render, show original error
                e.exit();
            }
        }
    };

    if matches.get_flag("list-transforms") {
        handle_list_transforms_command();
        return;
    }

    let mut config = load_cli_config(matches.get_one::<String>("config").map(|s| s.as_str()));
    apply_config_overrides(&mut config, &mut extra_params);

    match matches.subcommand() {
        Some(("inspect", sub_matches)) => {
            let path = sub_matches
                .get_one::<String>("path")
                .expect("path is required");
            let transform = sub_matches
                .get_one::<String>("transform")
                .map(|s| s.as_str())
                .unwrap_or("node-treeviz");
            handle_inspect_command(path, transform, &extra_params, &config);
        }
        Some(("render", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            let to_arg = sub_matches.get_one::<String>("to");
            let output = sub_matches.get_one::<String>("output").map(|s| s.as_str());

            // Infer --to from the output extension if not provided
            let to = if let Some(t) = to_arg {
                t.to_string()
            } else {
                let registry = SurfaceRegistry::default();
                match output.and_then(|path| registry.detect_surface_from_filename(path)) {
                    Some(detected) => detected,
                    None => {
                        eprintln!("Error: Could not infer the target surface");
                        eprintln!("Please specify --to explicitly or use -o with a known extension");
                        std::process::exit(1);
                    }
                }
            };

            handle_render_command(input, &to, output, &extra_params, &config);
        }
        Some(("fmt", sub_matches)) => {
            let input = sub_matches
                .get_one::<String>("input")
                .expect("input is required");
            // Fmt always outputs canonical markup to stdout (no -o flag)
            handle_render_command(input, "markup", None, &extra_params, &config);
        }
        Some(("generate-css", _)) => {
            handle_generate_css_command();
        }
        _ => {
            eprintln!("Unknown subcommand. Use --help for usage information.");
            std::process::exit(1);
        }
    }
}

/// Handle the inspect command
fn handle_inspect_command(
    path: &str,
    transform: &str,
    extra_params: &HashMap<String, String>,
    config: &MarqConfig,
) {
    let source = fs::read_to_string(path).unwrap_or_else(|e| {
        eprintln!("Error reading file '{path}': {e}");
        std::process::exit(1);
    });

    let params = build_inspect_params(config, extra_params);

    let output = transforms::execute_transform(&source, transform, &params).unwrap_or_else(|e| {
        eprintln!("Execution error: {e}");
        std::process::exit(1);
    });

    print!("{output}");
}

/// Handle the render command
fn handle_render_command(
    input: &str,
    to: &str,
    output: Option<&str>,
    extra_params: &HashMap<String, String>,
    config: &MarqConfig,
) {
    let registry = SurfaceRegistry::default();

    // Validate the surface exists
    if let Err(e) = registry.get(to) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    // Read input file
    let source = fs::read_to_string(input).unwrap_or_else(|e| {
        eprintln!("Error reading file '{input}': {e}");
        std::process::exit(1);
    });

    // Parse. A malformed document still renders: the builder reports the
    // failure as a terminal diagnostic node and the surface displays it.
    let doc = marq_core::parse(&source);

    let mut surface_options = HashMap::new();
    if to == "html" {
        surface_options.insert(
            "theme".to_string(),
            theme_name(config.render.html.theme).to_string(),
        );
        if let Some(css_path) = &config.render.html.custom_css {
            let css = fs::read_to_string(css_path).unwrap_or_else(|e| {
                eprintln!("Error reading CSS file '{css_path}': {e}");
                std::process::exit(1);
            });
            surface_options.insert("custom-css".to_string(), css);
        }
    }
    if to == "treeviz" {
        surface_options.insert(
            "max-label-length".to_string(),
            config.inspect.treeviz.max_label_length.to_string(),
        );
        if config.inspect.treeviz.show_index {
            surface_options.insert("show-index".to_string(), "true".to_string());
        }
    }
    for (key, value) in extra_params {
        surface_options.insert(key.clone(), value.clone());
    }

    let rendered = registry
        .render_with_options(&doc, to, &surface_options)
        .unwrap_or_else(|e| {
            eprintln!("Render error: {e}");
            std::process::exit(1);
        });

    // Output
    match output {
        Some(path) => {
            fs::write(path, rendered).unwrap_or_else(|e| {
                eprintln!("Error writing file '{path}': {e}");
                std::process::exit(1);
            });
        }
        None => {
            print!("{rendered}");
        }
    }
}

/// Handle the generate-css command
fn handle_generate_css_command() {
    print!("{}", marq_render::surfaces::html::get_default_css());
}

/// Handle the list-transforms command
fn handle_list_transforms_command() {
    println!("Available transforms:\n");
    println!("Stages:");
    println!("  token  - Token stream from the tokenizer");
    println!("  node   - Node sequence from the tree builder\n");

    println!("Formats:");
    println!("  json     - JSON output (both stages)");
    println!("  simple   - Plain token kind names");
    println!("  pprint   - Kind names with literals");
    println!("  treeviz  - Tree visualization (nodes only)\n");

    println!("Available transform combinations:");
    for transform_name in transforms::AVAILABLE_TRANSFORMS {
        println!("  {transform_name}");
    }

    println!("\nRender surfaces:");
    let registry = SurfaceRegistry::default();
    for surface_name in registry.list_surfaces() {
        println!("  {surface_name}");
    }
}

fn load_cli_config(explicit_path: Option<&str>) -> MarqConfig {
    let loader = Loader::new().with_optional_file("marq.toml");
    let loader = if let Some(path) = explicit_path {
        loader.with_file(path)
    } else {
        loader
    };

    loader.build().unwrap_or_else(|err| {
        eprintln!("Failed to load configuration: {err}");
        std::process::exit(1);
    })
}

fn theme_name(theme: HtmlThemeConfig) -> &'static str {
    match theme {
        HtmlThemeConfig::Modern => "modern",
        HtmlThemeConfig::Serif => "serif",
    }
}

fn apply_config_overrides(config: &mut MarqConfig, extra_params: &mut HashMap<String, String>) {
    if let Some(raw) = take_override(extra_params, &["theme"]) {
        config.render.html.theme = match raw.as_str() {
            "serif" => HtmlThemeConfig::Serif,
            "modern" | "default" => HtmlThemeConfig::Modern,
            other => {
                eprintln!("Unknown theme '{other}' (expected 'modern' or 'serif')");
                std::process::exit(1);
            }
        };
    }

    if let Some(path) = take_override(extra_params, &["css", "css-path"]) {
        config.render.html.custom_css = Some(path);
    }

    if let Some(raw) = take_override(extra_params, &["token-literals"]) {
        config.inspect.tokens.include_literals = parse_bool_arg("token-literals", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["show-index"]) {
        config.inspect.treeviz.show_index = parse_bool_arg("show-index", &raw);
    }
    if let Some(raw) = take_override(extra_params, &["max-label-length"]) {
        config.inspect.treeviz.max_label_length = raw.parse().unwrap_or_else(|_| {
            eprintln!("Invalid value '{raw}' for --extra-max-label-length");
            std::process::exit(1);
        });
    }
}

fn build_inspect_params(
    config: &MarqConfig,
    overrides: &HashMap<String, String>,
) -> HashMap<String, String> {
    let mut params = HashMap::new();

    params.insert(
        "token-literals".to_string(),
        if config.inspect.tokens.include_literals {
            "true".to_string()
        } else {
            "false".to_string()
        },
    );

    params.insert(
        "max-label-length".to_string(),
        config.inspect.treeviz.max_label_length.to_string(),
    );
    if config.inspect.treeviz.show_index {
        params.insert("show-index".to_string(), "true".to_string());
    }

    for (key, value) in overrides {
        params.insert(key.clone(), value.clone());
    }

    params
}

fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(value) = map.remove(*key) {
            return Some(value);
        }
    }
    None
}

fn parse_bool_arg(flag: &str, raw: &str) -> bool {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => true,
        "false" | "0" | "no" | "n" => false,
        other => {
            eprintln!("Invalid boolean value '{other}' for --extra-{flag}");
            std::process::exit(1);
        }
    }
}
