// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;

use anyhow::{Context, Result};

use debtbook::{cli, config::Settings, init_tracing, session::Session, shell};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();

    let settings = Settings::load(matches.get_one::<PathBuf>("config").map(PathBuf::as_path))?;
    init_tracing(&settings.log_filter);
    tracing::debug!(?settings, "settings loaded");

    let mut session = Session::new(settings);

    if let Some(path) = matches.get_one::<PathBuf>("script") {
        let file =
            File::open(path).with_context(|| format!("Não foi possível abrir o script {}", path.display()))?;
        return shell::run_script(&mut session, BufReader::new(file));
    }
    if io::stdin().is_terminal() {
        shell::run_interactive(&mut session)
    } else {
        shell::run_script(&mut session, io::stdin().lock())
    }
}
