use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};

use aetheria::config::AppConfig;
use aetheria::core::name_gen::{
    export_line, parse_phoneme_list, GenerateRequest, GenerateResponse, HistoryStore,
    LoadOutcome, NameSynthesizer, OverrideProfile, ProfileRegistry, ProfileStore,
    DEFAULT_EXPORT_FILE,
};

/// Generate fantasy names from configurable language profiles.
#[derive(Parser)]
#[command(name = "aetheria", version, about)]
struct Cli {
    /// Config file (defaults to ~/.config/aetheria/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate names from a preset
    Generate(GenerateArgs),
    /// List built-in and custom presets
    Presets,
    /// Print a preset as JSON
    Show {
        /// Preset id
        id: String,
    },
    /// Save a preset plus overrides as a custom preset
    Save(SaveArgs),
    /// Delete a custom preset
    Delete {
        /// Custom preset id
        id: String,
    },
    /// Show, prune or export previously generated names
    History(HistoryArgs),
}

#[derive(Args)]
struct GenerateArgs {
    /// Preset id (defaults to the configured preset)
    #[arg(short, long)]
    preset: Option<String>,

    /// Number of names
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Attach prefix meanings
    #[arg(short, long)]
    meaning: bool,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Print the response as JSON
    #[arg(long)]
    json: bool,

    /// Do not record this batch in the history
    #[arg(long)]
    no_history: bool,

    #[command(flatten)]
    overrides: OverrideArgs,
}

#[derive(Args)]
struct SaveArgs {
    /// Display name of the new preset
    name: String,

    /// Preset to derive from (defaults to the configured preset)
    #[arg(short, long)]
    preset: Option<String>,

    #[command(flatten)]
    overrides: OverrideArgs,
}

#[derive(Args)]
struct HistoryArgs {
    /// Delete the whole history
    #[arg(long, conflicts_with_all = ["remove", "export"])]
    clear: bool,

    /// Remove one entry by its listed number (1 = newest)
    #[arg(long, value_name = "N", conflicts_with = "export")]
    remove: Option<usize>,

    /// Write the history as plain text
    #[arg(
        long,
        value_name = "FILE",
        num_args = 0..=1,
        default_missing_value = DEFAULT_EXPORT_FILE
    )]
    export: Option<PathBuf>,
}

#[derive(Args)]
struct OverrideArgs {
    /// Comma-separated consonants replacing the preset's
    #[arg(long)]
    consonants: Option<String>,

    /// Comma-separated vowels replacing the preset's
    #[arg(long)]
    vowels: Option<String>,

    #[arg(long)]
    tone_harshness: Option<f64>,

    #[arg(long)]
    tone_darkness: Option<f64>,

    #[arg(long)]
    tone_elegance: Option<f64>,

    /// JSON or YAML file holding a partial profile
    #[arg(long = "override", value_name = "FILE")]
    override_file: Option<PathBuf>,
}

impl OverrideArgs {
    /// Combine the override file and flags; flags win. `None` if nothing was set.
    fn to_override(&self) -> anyhow::Result<Option<OverrideProfile>> {
        let mut ov = match &self.override_file {
            Some(path) => read_override_file(path)?,
            None => OverrideProfile::new(),
        };

        if let Some(list) = self.consonants.as_deref().map(parse_phoneme_list) {
            if !list.is_empty() {
                ov = ov.with_consonants(list);
            }
        }
        if let Some(list) = self.vowels.as_deref().map(parse_phoneme_list) {
            if !list.is_empty() {
                ov = ov.with_vowels(list);
            }
        }
        if let Some(v) = self.tone_harshness {
            ov = ov.with_harshness(v);
        }
        if let Some(v) = self.tone_darkness {
            ov = ov.with_darkness(v);
        }
        if let Some(v) = self.tone_elegance {
            ov = ov.with_elegance(v);
        }

        Ok((!ov.is_empty()).then_some(ov))
    }
}

fn read_override_file(path: &Path) -> anyhow::Result<OverrideProfile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read override file {}", path.display()))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let ov = if is_yaml {
        serde_yaml_ng::from_str(&content)
            .with_context(|| format!("Failed to parse {} as YAML", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {} as JSON", path.display()))?
    };
    Ok(ov)
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(AppConfig::config_path);
    let (config, config_source) = AppConfig::load_with_source(&config_path);

    let log_dir = config.log_dir();
    let _log_guard = aetheria::core::logging::init(&config.logging, log_dir.as_deref(), cli.verbose);
    config_source.log();
    log::debug!("aetheria v{} starting", aetheria::VERSION);

    let store = ProfileStore::new(config.custom_profiles_path());
    let mut registry = ProfileRegistry::with_builtins();
    let outcome = store.load_into_lenient(&mut registry)?;
    if let LoadOutcome::Loaded(count) = &outcome {
        log::debug!("Loaded {} custom profile(s) from {}", count, store.path().display());
    }

    match cli.command {
        Commands::Generate(args) => generate(&config, &registry, args),
        Commands::History(args) => history(&config, args),
        Commands::Presets => {
            list_presets(&registry);
            Ok(())
        }
        Commands::Show { id } => {
            let Some(profile) = registry.get(&id) else {
                bail!("Preset not found: {id}");
            };
            println!("{}", serde_json::to_string_pretty(profile)?);
            Ok(())
        }
        Commands::Save(args) => {
            let base = args
                .preset
                .unwrap_or_else(|| config.generation.default_preset.clone());
            let ov = args.overrides.to_override()?;
            let id = registry.save_custom(&base, &args.name, ov.as_ref())?;
            store.save_registry_after(&registry, &outcome)?;
            println!("Saved '{}' as {}", args.name.trim(), id);
            Ok(())
        }
        Commands::Delete { id } => {
            let removed = registry.remove_custom(&id)?;
            store.save_registry_after(&registry, &outcome)?;
            println!("Deleted '{}' ({})", removed.name, removed.id);
            Ok(())
        }
    }
}

fn generate(config: &AppConfig, registry: &ProfileRegistry, args: GenerateArgs) -> anyhow::Result<()> {
    let mut request = GenerateRequest::new(
        args.preset
            .unwrap_or_else(|| config.generation.default_preset.clone()),
    );
    request.count = args.count;
    if args.meaning {
        request.with_meaning = Some(true);
    }
    request.override_profile = args.overrides.to_override()?;

    let options = config.synthesis_options();
    let defaults = config.request_defaults();
    let response = match args.seed {
        Some(seed) => {
            let mut synth = NameSynthesizer::with_seed(seed).with_options(options);
            request.resolve(registry, &mut synth, &defaults)?
        }
        None => {
            let mut synth = NameSynthesizer::new().with_options(options);
            request.resolve(registry, &mut synth, &defaults)?
        }
    };

    if config.data.record_history && !args.no_history {
        let history = HistoryStore::new(config.history_path());
        // A broken history file must not block generation or be overwritten
        if let Err(e) = history.record(&response.results) {
            log::warn!("Not recording names in history: {e}");
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_names(&response);
    }
    Ok(())
}

fn history(config: &AppConfig, args: HistoryArgs) -> anyhow::Result<()> {
    let store = HistoryStore::new(config.history_path());

    if args.clear {
        store.clear()?;
        println!("History cleared");
        return Ok(());
    }

    if let Some(number) = args.remove {
        let Some(index) = number.checked_sub(1) else {
            bail!("History entries are numbered from 1");
        };
        match store.remove(index)? {
            Some(removed) => println!("Removed {}", export_line(&removed)),
            None => bail!("No history entry #{number}"),
        }
        return Ok(());
    }

    if let Some(target) = args.export {
        let count = store.export_to(&target)?;
        println!("Exported {} name(s) to {}", count, target.display());
        return Ok(());
    }

    let history = store.load()?;
    if history.is_empty() {
        println!("No names generated yet.");
    }
    for (i, name) in history.entries().iter().enumerate() {
        println!("{:>3}. {}", i + 1, export_line(name));
    }
    Ok(())
}

fn print_names(response: &GenerateResponse) {
    for name in &response.results {
        match &name.meaning {
            Some(meaning) => println!("{:<24} {:<26} {}", name.singular, name.plural, meaning),
            None => println!("{:<24} {}", name.singular, name.plural),
        }
    }
}

fn list_presets(registry: &ProfileRegistry) {
    for profile in registry.profiles() {
        let kind = if registry.is_builtin(&profile.id) {
            "built-in"
        } else {
            "custom"
        };
        println!(
            "{:<24} {:<20} {:<8} plural={:<7} tone=({:.2}, {:.2}, {:.2})",
            profile.id,
            profile.name,
            kind,
            profile.plural_rule,
            profile.tone.harshness,
            profile.tone.darkness,
            profile.tone.elegance
        );
    }
}
