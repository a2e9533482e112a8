//! `facehash query` - inspect the choices a seed hashes to.

use crate::avatar::hash::seed_hash;
use crate::avatar::select;
use crate::cli::QueryArgs;
use crate::config::Config;
use anyhow::Result;
use serde_json::json;

/// Print one JSON row per seed to stdout.
pub fn run_query(args: &QueryArgs, config: &Config) -> Result<()> {
    let palette = config.avatar.colors();

    let rows: Vec<serde_json::Value> = args
        .seeds
        .iter()
        .map(|seed| {
            let choice = select::derive(seed, &palette);
            json!({
                "seed": seed,
                "hash": seed_hash(seed),
                "face": choice.face,
                "color": choice.color,
                "rotation": choice.rotation,
                "initial": choice.initial,
            })
        })
        .collect();

    let output = json!({
        "settings_version": config.settings_version(),
        "avatars": rows,
    });

    if args.pretty {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", serde_json::to_string(&output)?);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;

    #[test]
    fn test_query_row_shape() {
        let config = test_parse_config("[avatar]\npalette = [\"#111111\", \"#222222\", \"#333333\"]");
        let palette = config.avatar.colors();
        let choice = select::derive("alice", &palette);

        let row = json!({
            "seed": "alice",
            "hash": seed_hash("alice"),
            "face": choice.face,
            "color": choice.color,
            "rotation": choice.rotation,
            "initial": choice.initial,
        });

        assert_eq!(row["hash"], 92_903_040u32);
        assert_eq!(row["face"], "round");
        assert_eq!(row["color"], "#111111");
        assert_eq!(row["rotation"]["x"], -1);
        assert_eq!(row["rotation"]["y"], 1);
        assert_eq!(row["initial"], "A");
    }
}
