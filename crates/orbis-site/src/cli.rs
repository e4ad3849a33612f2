use std::path::PathBuf;

use clap::Parser;

/// Orbis: an interactive noise blob in a particle field.
#[derive(Parser, Debug)]
#[command(name = "orbis", version, about)]
pub struct Args {
    /// Location to open first.
    #[arg(long, default_value = "/")]
    pub route: String,

    /// TOML file overriding the scene settings.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `orbis_scene=trace`. Overrides `RUST_LOG`.
    #[arg(long)]
    pub log: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_index_route() {
        let args = Args::try_parse_from(["orbis"]).unwrap();
        assert_eq!(args.route, "/");
        assert!(args.settings.is_none());
        assert!(args.log.is_none());
    }

    #[test]
    fn accepts_all_flags() {
        let args = Args::try_parse_from([
            "orbis",
            "--route",
            "/projects/3",
            "--settings",
            "scene.toml",
            "--log",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.route, "/projects/3");
        assert_eq!(args.settings, Some(PathBuf::from("scene.toml")));
        assert_eq!(args.log.as_deref(), Some("debug"));
    }
}
