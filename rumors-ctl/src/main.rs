use std::{io::Read, path::PathBuf};

use anyhow::Context;
use rumors_client::{
    api::{ReplyConnection, Time},
    compose, parse_time_zone, CardOptions, DisplaySettings, Locale,
};

#[derive(structopt::StructOpt)]
struct Opt {
    /// JSON file holding a reply connection or a list of them, `-` for stdin
    #[structopt(short, long, default_value = "-")]
    input: PathBuf,

    /// Overrides RUMORS_LOCALE (en, zh-TW)
    #[structopt(long)]
    locale: Option<Locale>,

    /// Overrides RUMORS_TIME_ZONE, eg. Asia/Taipei
    #[structopt(long, parse(try_from_str = parse_time_zone))]
    tz: Option<chrono_tz::Tz>,

    /// Reference time for relative dates, defaults to the current time
    #[structopt(long, parse(try_from_str = parse_time))]
    now: Option<Time>,

    /// Render the timestamp as plain text instead of a link
    #[structopt(long)]
    no_link_to_reply: bool,

    /// Render the action control as disabled
    #[structopt(long)]
    disabled: bool,

    /// Label of the action control
    #[structopt(long)]
    action_text: Option<String>,
}

#[derive(serde::Deserialize)]
#[serde(untagged)]
enum Input {
    One(ReplyConnection),
    Many(Vec<ReplyConnection>),
}

fn parse_time(s: &str) -> anyhow::Result<Time> {
    let t = chrono::DateTime::parse_from_rfc3339(s)
        .with_context(|| format!("parsing {s:?} as an RFC 3339 date"))?;
    Ok(t.with_timezone(&chrono::Utc))
}

fn read_input(path: &PathBuf) -> anyhow::Result<Vec<ReplyConnection>> {
    let mut data = String::new();
    if path.as_os_str() == "-" {
        std::io::stdin()
            .read_to_string(&mut data)
            .context("reading reply connections from stdin")?;
    } else {
        data = std::fs::read_to_string(path)
            .with_context(|| format!("reading reply connections from {path:?}"))?;
    }
    let input: Input = serde_json::from_str(&data).context("parsing reply connections")?;
    Ok(match input {
        Input::One(c) => vec![c],
        Input::Many(cs) => cs,
    })
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();
    let opt = <Opt as structopt::StructOpt>::from_args();

    let mut settings = DisplaySettings::from_env().context("reading display settings")?;
    if let Some(locale) = opt.locale {
        settings.locale = locale;
    }
    if let Some(tz) = opt.tz {
        settings.time_zone = tz;
    }
    let options = CardOptions {
        disabled: opt.disabled,
        action_text: opt.action_text.clone(),
        link_to_reply: !opt.no_link_to_reply,
    };
    let now = opt.now.unwrap_or_else(chrono::Utc::now);

    let connections = read_input(&opt.input)?;
    tracing::info!(count = connections.len(), "rendering reply connections");
    for (i, c) in connections.iter().enumerate() {
        if i != 0 {
            println!();
        }
        println!("{}", compose(c, &options, &settings, now));
    }

    Ok(())
}
