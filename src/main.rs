// SPDX-License-Identifier: MPL-2.0
use iced_folio::app::{self, paths, Flags};

const HELP: &str = "\
Usage: iced_folio [OPTIONS]

Options:
  --lang <id>          Interface language (e.g. en-US, fr)
  --config-dir <dir>   Directory holding settings.toml
  -h, --help           Print this help
";

fn main() -> iced::Result {
    tracing_subscriber::fmt::init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let flags = Flags {
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --lang");
            None
        }),
        config_dir: args.opt_value_from_str("--config-dir").unwrap_or_else(|err| {
            tracing::warn!(error = %err, "ignoring --config-dir");
            None
        }),
    };

    let rest = args.finish();
    if !rest.is_empty() {
        tracing::warn!(?rest, "unused arguments");
    }

    paths::init_cli_overrides(flags.config_dir.clone());
    app::run(flags)
}
