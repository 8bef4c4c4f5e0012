//! genome-view: resolve function color legends and render genome view tables
//! from the command line.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use std::path::{Path, PathBuf};

    use anyhow::{bail, Context, Result};
    use clap::{Parser, Subcommand};

    use genome_view::config::{AppConfig, LogLevel};
    use genome_view::model::{CategoryType, GeneId, GenomeData, GenomeId, HexColor};
    use genome_view::{ui, ColorResolver, GenomeViewApp};

    /// Genome view front-end tools
    #[derive(Parser, Debug)]
    #[command(name = "genome-view")]
    #[command(version)]
    #[command(about = "Resolve function color legends and render genome view tables")]
    struct Cli {
        #[command(subcommand)]
        command: Commands,

        /// Configuration file (defaults to the user config directory)
        #[arg(long, global = true)]
        config: Option<PathBuf>,

        /// Log level (error, warn, info, debug, trace); overrides the config
        #[arg(long, global = true)]
        log_level: Option<LogLevel>,
    }

    #[derive(Subcommand, Debug)]
    enum Commands {
        /// Print the function color legend
        Colors {
            /// Dataset JSON
            #[arg(long)]
            data: PathBuf,

            /// Category type: Source, COG or KEGG
            #[arg(long = "type")]
            category_type: Option<String>,

            /// List every category, not only those found in the genomes
            #[arg(long)]
            no_filter: bool,

            /// Print HTML rows instead of tab-separated text
            #[arg(long)]
            html: bool,

            /// Override a category color, e.g. `--set B=#ff0000` (repeatable)
            #[arg(long = "set", value_parser = parse_key_color)]
            set: Vec<(String, HexColor)>,

            /// Write the overrides back to the configuration file
            #[arg(long)]
            save: bool,
        },

        /// Give one gene its own legend color and save it in the configuration
        Highlight {
            /// Dataset JSON
            #[arg(long)]
            data: PathBuf,

            /// Genome name
            #[arg(long)]
            genome: String,

            /// Gene caller ID
            #[arg(long)]
            gene: u32,

            /// Highlight color (#RGB or #RRGGBB)
            #[arg(long)]
            color: HexColor,
        },

        /// Print the genome and layer table bodies
        Tables {
            /// Dataset JSON
            #[arg(long)]
            data: PathBuf,
        },

        /// Print the tooltip for one gene
        Tooltip {
            /// Dataset JSON
            #[arg(long)]
            data: PathBuf,

            /// Genome name
            #[arg(long)]
            genome: String,

            /// Gene caller ID
            #[arg(long)]
            gene: u32,
        },
    }

    fn load_config(path: Option<&PathBuf>) -> Result<AppConfig> {
        match path {
            Some(path) => AppConfig::load(path)
                .with_context(|| format!("Failed to load configuration {:?}", path)),
            None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
        }
    }

    fn parse_key_color(s: &str) -> Result<(String, HexColor), String> {
        let (key, color) = s
            .split_once('=')
            .ok_or_else(|| format!("expected KEY=#COLOR, got '{}'", s))?;
        let color = HexColor::parse(color.trim()).map_err(|e| e.to_string())?;
        Ok((key.trim().to_string(), color))
    }

    fn save_config(config: &AppConfig, path: Option<&PathBuf>) -> Result<()> {
        match path {
            Some(path) => config
                .save(path)
                .with_context(|| format!("Failed to save configuration {:?}", path)),
            None => config
                .save_to_default_path()
                .context("Failed to save configuration"),
        }
    }

    fn load_data(path: &Path) -> Result<GenomeData> {
        GenomeData::load(path).with_context(|| format!("Failed to load dataset {:?}", path))
    }

    pub fn run() -> Result<()> {
        let cli = Cli::parse();
        let mut config = load_config(cli.config.as_ref())?;

        let level = cli.log_level.unwrap_or(config.preferences.log_level);
        env_logger::Builder::new()
            .filter_level(level.to_level_filter())
            .parse_default_env()
            .init();

        match cli.command {
            Commands::Colors {
                data,
                category_type,
                no_filter,
                html,
                set,
                save,
            } => {
                let data = load_data(&data)?;
                let selected: Option<CategoryType> = match category_type.as_deref() {
                    None => Some(config.preferences.default_category_type),
                    Some(name) => name.parse().ok(),
                };
                if !set.is_empty() {
                    let Some(selected) = selected else {
                        bail!("Unknown category type '{}'", category_type.unwrap_or_default());
                    };
                    for (key, color) in set {
                        if !config.set_override(selected, &key, color) {
                            bail!("'{}' is not a {} category", key, selected);
                        }
                    }
                }
                let selector = match (category_type.as_deref(), selected) {
                    (Some(name), _) => name.to_string(),
                    (None, Some(t)) => t.name().to_string(),
                    (None, None) => String::new(),
                };
                let filter = config.preferences.filter_to_observed && !no_filter;

                let rows = ColorResolver::new(&data).resolve_named(
                    Some(&selector),
                    selected.and_then(|t| config.overrides_for(t)),
                    Some(&config.highlight_genes),
                    filter,
                );
                if html {
                    println!("{}", ui::color_table_rows(&rows));
                } else {
                    for row in &rows {
                        println!("{}\t{}\t{}", row.key, row.color, row.label);
                    }
                }
                if save {
                    save_config(&config, cli.config.as_ref())?;
                }
            }
            Commands::Highlight {
                data,
                genome,
                gene,
                color,
            } => {
                let mut app = GenomeViewApp::new(load_data(&data)?, config);
                let genome_id = GenomeId::new(genome);
                if !app.highlight_gene(genome_id.clone(), GeneId(gene), color) {
                    bail!("No gene {} in genome '{}'", gene, genome_id);
                }
                app.save_config(cli.config.as_deref())
                    .context("Failed to save configuration")?;
                println!("{}", app.color_table_html());
            }
            Commands::Tables { data } => {
                let app = GenomeViewApp::new(load_data(&data)?, config);
                println!("{}", app.genome_table_html());
                println!("{}", app.layer_table_html());
            }
            Commands::Tooltip { data, genome, gene } => {
                let app = GenomeViewApp::new(load_data(&data)?, config);
                let genome_id = GenomeId::new(genome);
                let tip = app
                    .gene_tooltip(&genome_id, GeneId(gene), (0, 0))
                    .with_context(|| format!("No gene {} in genome '{}'", gene, genome_id))?;
                println!("{}", tip.html);
            }
        }
        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    if let Err(e) = cli::run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

// WASM doesn't use main(), it uses wasm_bindgen's start function
#[cfg(target_arch = "wasm32")]
fn main() {}
