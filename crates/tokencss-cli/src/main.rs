use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tokencss_codegen::{compile, ColorFormat, CompileOptions, Selector};
use tokencss_tree::TokensFile;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tokencss")]
#[command(about = "Convert design token JSON files into CSS custom properties")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert every .json token file in a directory
    Build(BuildArgs),

    /// Convert a single token file and report problems without writing output
    Check {
        /// Input .json token file
        path: PathBuf,
    },
}

#[derive(Args)]
struct BuildArgs {
    /// Directory containing .json token files
    #[arg(short, long, default_value = "tokens")]
    input: PathBuf,

    /// Directory generated files are written to
    #[arg(short, long, default_value = "dist")]
    out: PathBuf,

    /// Output flavor
    #[arg(short, long, value_enum, default_value_t = Format::Css)]
    format: Format,

    /// Spaces per indentation level
    #[arg(long, default_value_t = 2)]
    indent: usize,

    /// How color tokens are written
    #[arg(long, value_enum, default_value_t = ColorArg::Raw)]
    color: ColorArg,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    /// `:root { ... }` in `<name>.css`
    Css,
    /// `%<name> { ... }` in `<name>.module.scss`
    Scss,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ColorArg {
    /// Keep color strings as written
    Raw,
    /// Rewrite colors as rgb()/rgba()
    Rgb,
}

impl From<ColorArg> for ColorFormat {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Raw => ColorFormat::Raw,
            ColorArg::Rgb => ColorFormat::Rgb,
        }
    }
}

impl Format {
    fn selector(self, file_name: &str) -> Selector {
        match self {
            Format::Css => Selector::Root,
            Format::Scss => Selector::for_file(file_name),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Format::Css => "css",
            Format::Scss => "module.scss",
        }
    }
}

fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => cmd_build(&args),
        Command::Check { path } => cmd_check(&path),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

/// `.json` files directly inside `dir`, sorted by name.
fn token_files(dir: &Path) -> std::io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "json") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn read_tree(path: &Path) -> Result<TokensFile, String> {
    let source = std::fs::read_to_string(path)
        .map_err(|e| format!("reading {}: {e}", path.display()))?;
    TokensFile::from_json(&source)
        .map_err(|e| format!("{}: {e}", path.display()))
}

fn cmd_build(args: &BuildArgs) -> ExitCode {
    let files = match token_files(&args.input) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error reading {}: {e}", args.input.display());
            return ExitCode::FAILURE;
        }
    };

    if files.is_empty() {
        tracing::warn!("no token files found in {}", args.input.display());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = std::fs::create_dir_all(&args.out) {
        eprintln!("Error creating {}: {e}", args.out.display());
        return ExitCode::FAILURE;
    }

    let mut failed = 0;
    for path in &files {
        if let Err(e) = build_file(path, args) {
            tracing::error!("{e}");
            failed += 1;
        }
    }

    if failed > 0 {
        eprintln!("{failed} of {} token files failed", files.len());
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn build_file(path: &Path, args: &BuildArgs) -> Result<(), String> {
    let tree = read_tree(path)?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let options = CompileOptions {
        selector: args.format.selector(&file_name),
        indent: args.indent,
        color: args.color.into(),
    };
    let output = compile(&tree, &options);

    let out_path = args.out.join(format!("{stem}.{}", args.format.extension()));
    std::fs::write(&out_path, &output.css)
        .map_err(|e| format!("writing {}: {e}", out_path.display()))?;

    tracing::info!("Wrote {}", out_path.display());
    Ok(())
}

fn cmd_check(path: &Path) -> ExitCode {
    let tree = match read_tree(path) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let output = compile(&tree, &CompileOptions::default());
    if !output.unsupported.is_empty() {
        eprintln!(
            "{}: {} composite token(s) will be written as placeholders",
            path.display(),
            output.unsupported.len()
        );
    }

    eprintln!("OK: {} ({} tokens)", path.display(), output.token_count);
    ExitCode::SUCCESS
}
