use clap::Parser;
use breed_info::{browse, breeds, cli, config, error, logging, lookup, photos};
use cli::{Cli, Commands};
use config::Config;
use error::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Class { name } => {
            lookup::print_class(name.as_deref())?;
        }

        Commands::Purpose { name } => {
            lookup::print_purpose(name.as_deref())?;
        }

        Commands::Convert { purposes } => {
            lookup::print_converted(&purposes);
        }

        Commands::Cards { input, output, cards } => {
            let config = Config::load()?;
            breeds::run_cards(&input, output.as_deref(), cards, &config.image_template())?;
            if let Some(output) = output {
                eprintln!("✔ 出力: {}", output.display());
            }
        }

        Commands::Photos { input, web_root } => {
            let config = Config::load()?;
            let web_root = web_root.unwrap_or_else(|| config.web_root.clone());
            photos::run_photos(&input, &web_root, &config.image_template())?;
        }

        Commands::Browse => {
            browse::run_browse()?;
        }

        Commands::Config { set_web_root, show } => {
            let mut config = Config::load()?;

            if let Some(web_root) = set_web_root {
                config.set_web_root(web_root)?;
                println!("✔ 画像の基準ディレクトリを設定しました");
            }

            if show {
                println!("設定:");
                println!("  設定ファイル: {}", Config::config_path()?.display());
                println!("  基準ディレクトリ: {}", config.web_root.display());
                println!("  画像パス: {}", config.image_base);
            }
        }
    }

    Ok(())
}
