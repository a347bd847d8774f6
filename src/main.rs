// --- Planificador de franjas de examen - Archivo principal ---

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use log::{error, info};

use clashgraph::algorithm::{build_clash_graph, dedup_clashes, welsh_powell};
use clashgraph::config::Config;
use clashgraph::datafiles::{read_clash_records, write_clash_csv_file};
use clashgraph::report::{to_dot, ScheduleSummary};
use clashgraph::ClashResult;

#[derive(Parser)]
#[command(name = "clashgraph")]
#[command(about = "Asigna franjas de examen coloreando el grafo de choques entre cursos", long_about = None)]
struct Cli {
    /// Log detallado (nivel debug)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Hoja a leer en archivos xlsx/ods (por defecto CLASHGRAPH_SHEET o la primera)
    #[arg(long, global = true)]
    sheet: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Elimina choques duplicados (A,B)/(B,A) y escribe la tabla podada
    Prune {
        input: String,
        #[arg(short, long)]
        output: PathBuf,
    },
    /// Construye el grafo, lo colorea e imprime la franja de cada curso
    Color {
        input: String,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
        /// Exporta además el grafo coloreado en formato Graphviz DOT
        #[arg(long)]
        dot: Option<PathBuf>,
        /// No podar duplicados (la entrada ya viene podada)
        #[arg(long)]
        no_dedup: bool,
    },
    /// Lista los cursos que chocan con `course` y cuántos alumnos comparten
    Clashes {
        input: String,
        course: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn run(cli: Cli, config: Config) -> ClashResult<()> {
    let sheet = cli.sheet.or(config.sheet.clone());
    match cli.command {
        Command::Prune { input, output } => {
            let records = read_clash_records(config.resolve_datafile(&input), sheet.as_deref())?;
            let pruned = dedup_clashes(records);
            write_clash_csv_file(&output, &pruned)?;
        }
        Command::Color { input, format, dot, no_dedup } => {
            let records = read_clash_records(config.resolve_datafile(&input), sheet.as_deref())?;
            let records = if no_dedup { records } else { dedup_clashes(records) };
            let clash_graph = build_clash_graph(&records)?;
            let coloring = welsh_powell(&clash_graph.graph);
            let summary = ScheduleSummary::new(&clash_graph, &coloring);
            match format {
                Format::Text => print!("{}", summary.to_text()),
                Format::Json => println!("{}", summary.to_json()?),
            }
            if let Some(path) = dot {
                std::fs::write(&path, to_dot(&clash_graph, &coloring))?;
                info!("💾 grafo DOT escrito en {}", path.display());
            }
        }
        Command::Clashes { input, course } => {
            let records = read_clash_records(config.resolve_datafile(&input), sheet.as_deref())?;
            let clash_graph = build_clash_graph(&dedup_clashes(records))?;
            println!("Cursos que chocan con {}:", course);
            for (other, students) in clash_graph.clashes_of(&course)? {
                println!("{:>9}{:>6}", other, students);
            }
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level)).init();

    let config = Config::from_env();
    match run(cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
