//! Tang - Entry Point
//!
//! | Command | Description |
//! |---------|-------------|
//! | `tang check` | Validate configuration text against declarations |
//! | `tang canonicalize` | Rewrite configuration text in canonical form |
//! | `tang describe` | List declared parameters and classes |

use clap::Parser;
use tang::cli::{Cli, run};
use tang_infrastructure::ConfigLoader;
use tang_infrastructure::logging::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.settings {
        loader = loader.with_config_path(path);
    }
    let settings = loader.load()?;
    init_logging(&settings.logging)?;

    run(&cli, &settings, &mut std::io::stdout().lock())
}
