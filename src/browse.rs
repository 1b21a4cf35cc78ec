//! 対話式の説明閲覧
//!
//! APAクラスまたは用途を選択し、説明を表示する。終了を選ぶまで繰り返す。

use crate::error::{BreedInfoError, Result};
use breed_info_common::{ApaClass, Purpose};
use dialoguer::Select;

/// トップメニューの選択肢
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Class,
    Purpose,
    Quit,
}

impl BrowseAction {
    pub const ALL: [BrowseAction; 3] = [BrowseAction::Class, BrowseAction::Purpose, BrowseAction::Quit];

    pub fn label(&self) -> &'static str {
        match self {
            BrowseAction::Class => "APAクラス",
            BrowseAction::Purpose => "品種用途",
            BrowseAction::Quit => "終了",
        }
    }
}

/// 選択インデックスから説明を取得
pub fn selected_description(action: BrowseAction, index: usize) -> Option<(&'static str, &'static str)> {
    match action {
        BrowseAction::Class => ApaClass::ALL.get(index).map(|c| (c.name(), c.description())),
        BrowseAction::Purpose => Purpose::ALL.get(index).map(|p| (p.name(), p.description())),
        BrowseAction::Quit => None,
    }
}

fn select(prompt: &str, items: &[&str]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| BreedInfoError::Prompt(e.to_string()))
}

/// 対話ループ
pub fn run_browse() -> Result<()> {
    let menu: Vec<&str> = BrowseAction::ALL.iter().map(|a| a.label()).collect();

    loop {
        let action = BrowseAction::ALL[select("表示する項目", &menu)?];

        let names: Vec<&str> = match action {
            BrowseAction::Class => ApaClass::ALL.iter().map(|c| c.name()).collect(),
            BrowseAction::Purpose => Purpose::ALL.iter().map(|p| p.name()).collect(),
            BrowseAction::Quit => break,
        };

        let index = select(action.label(), &names)?;
        if let Some((name, description)) = selected_description(action, index) {
            println!("\n■ {}\n  {}\n", name, description);
        }
    }

    Ok(())
}
