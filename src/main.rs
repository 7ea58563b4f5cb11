// SPDX-License-Identifier: MPL-2.0
use iced_alerts::app::{self, Flags};

fn main() -> iced::Result {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = pico_args::Arguments::from_env();

    let flags = Flags {
        no_animations: args.contains("--no-animations"),
        tick_ms: args.opt_value_from_str("--tick-ms").unwrap_or_else(|err| {
            log::error!("Invalid --tick-ms value: {err}");
            std::process::exit(2);
        }),
        lang: args.opt_value_from_str("--lang").unwrap_or_else(|err| {
            log::error!("Invalid --lang value: {err}");
            std::process::exit(2);
        }),
    };

    for unused in args.finish() {
        log::warn!("Ignoring unknown argument {unused:?}");
    }

    app::run(flags)
}
