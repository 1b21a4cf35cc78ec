use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "breed-info")]
#[command(about = "ニワトリ品種情報（APAクラス・用途）の参照ツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// APAクラスの説明を表示（省略時は全クラス）
    Class {
        /// クラス名（例: "American", "Not Listed"）
        name: Option<String>,
    },

    /// 品種用途の説明を表示（省略時は全用途）
    Purpose {
        /// 用途（例: "eggs", "show", "Dual-purpose"）
        name: Option<String>,
    },

    /// 用途文字列をリストに変換
    Convert {
        /// ", "区切りの用途（例: "meat, eggs"）
        #[arg(required = true)]
        purposes: String,
    },

    /// 品種JSONに画像パスを付与
    Cards {
        /// 品種JSONファイル（配列）
        #[arg(required = true)]
        input: PathBuf,

        /// 出力ファイル（省略時はstdout）
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 品種カード形式で出力
        #[arg(long)]
        cards: bool,
    },

    /// 品種写真の欠落をチェック
    Photos {
        /// 品種JSONファイル（配列）
        #[arg(required = true)]
        input: PathBuf,

        /// 画像パスの基準ディレクトリ（省略時は設定値）
        #[arg(long)]
        web_root: Option<PathBuf>,
    },

    /// 対話的に説明を閲覧
    Browse,

    /// 設定を表示/編集
    Config {
        /// 画像の基準ディレクトリを設定
        #[arg(long)]
        set_web_root: Option<PathBuf>,

        /// 設定を表示
        #[arg(long)]
        show: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_convert() {
        let cli = Cli::try_parse_from(["breed-info", "convert", "meat, eggs"]).unwrap();
        match cli.command {
            Commands::Convert { purposes } => assert_eq!(purposes, "meat, eggs"),
            _ => panic!("Convertではない"),
        }
        assert!(!cli.verbose);
    }

    #[test]
    fn test_parse_class_optional_name() {
        let cli = Cli::try_parse_from(["breed-info", "-v", "class"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Class { name: None }));

        let cli = Cli::try_parse_from(["breed-info", "class", "Not Listed"]).unwrap();
        assert!(matches!(cli.command, Commands::Class { name: Some(ref n) } if n == "Not Listed"));
    }

    #[test]
    fn test_parse_cards() {
        let cli = Cli::try_parse_from([
            "breed-info", "cards", "breeds.json", "-o", "out.json", "--cards",
        ])
        .unwrap();
        match cli.command {
            Commands::Cards { input, output, cards } => {
                assert_eq!(input, PathBuf::from("breeds.json"));
                assert_eq!(output, Some(PathBuf::from("out.json")));
                assert!(cards);
            }
            _ => panic!("Cardsではない"),
        }
    }

    #[test]
    fn test_parse_convert_requires_argument() {
        assert!(Cli::try_parse_from(["breed-info", "convert"]).is_err());
    }
}
