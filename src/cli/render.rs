//! `facehash render` - write avatars to stdout or files.

use crate::avatar::RenderRequest;
use crate::cli::{MAX_SIZE, MIN_SIZE, RenderArgs};
use crate::config::Config;
use crate::logger::ProgressLine;
use crate::utils::plural::plural_s;
use crate::{debug, log};
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};

/// Render the requested seeds.
///
/// A single seed with no output directory goes to stdout; everything else
/// becomes one SVG file per seed, rendered in parallel.
pub fn run_render(args: &RenderArgs, config: &Config) -> Result<()> {
    let size = clamped_size(args.size);
    let options = config.render_options();

    if args.seeds.len() == 1 && args.out.is_none() {
        let request = RenderRequest::new(args.seeds[0].clone(), size, options);
        println!("{}", request.to_svg());
        return Ok(());
    }

    let out_dir = args.out.clone().unwrap_or_else(|| PathBuf::from("."));
    fs::create_dir_all(&out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;

    let progress = ProgressLine::new(&[("avatars", args.seeds.len())]);
    let failures: Vec<anyhow::Error> = args
        .seeds
        .par_iter()
        .filter_map(|seed| {
            let request = RenderRequest::new(seed.clone(), size, options.clone());
            let result = write_avatar(&request, &out_dir);
            progress.inc("avatars");
            result.err()
        })
        .collect();
    progress.finish();

    for failure in &failures {
        log!("error"; "{failure:#}");
    }

    let written = args.seeds.len() - failures.len();
    log!(
        "render";
        "wrote {written} avatar{} to {}",
        plural_s(written),
        out_dir.display()
    );

    if failures.is_empty() {
        Ok(())
    } else {
        anyhow::bail!("{} render{} failed", failures.len(), plural_s(failures.len()))
    }
}

/// Render one request into `<dir>/<filename>`.
fn write_avatar(request: &RenderRequest, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(file_name(request));
    fs::write(&path, request.to_svg())
        .with_context(|| format!("failed to write {}", path.display()))?;
    debug!("render"; "{}", path.display());
    Ok(path)
}

/// Filesystem-safe file name for a request.
///
/// Seeds that survive slugification unchanged keep a readable name; lossy
/// ones get the content id appended so distinct seeds never collide.
fn file_name(request: &RenderRequest) -> String {
    let slug: String = request
        .seed
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { '-' })
        .collect();

    if slug == request.seed && !slug.is_empty() {
        format!("{slug}-{}.svg", request.size)
    } else {
        format!(
            "{}-{}-{}.svg",
            if slug.is_empty() { "avatar" } else { &slug },
            request.size,
            request.content_id()
        )
    }
}

/// Clamp a requested size into the served range, with a note when it moves.
fn clamped_size(requested: u32) -> u32 {
    let size = requested.clamp(MIN_SIZE, MAX_SIZE);
    if size != requested {
        log!("render"; "size {requested} out of range, using {size}");
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::avatar::RenderOptions;

    fn request(seed: &str) -> RenderRequest {
        RenderRequest::new(
            seed,
            64,
            RenderOptions {
                palette: vec!["#111111".into()],
                ..RenderOptions::default()
            },
        )
    }

    #[test]
    fn test_file_name_plain_seed() {
        assert_eq!(file_name(&request("alice")), "alice-64.svg");
    }

    #[test]
    fn test_file_name_lossy_seed_gets_content_id() {
        let name = file_name(&request("a b/c"));
        assert!(name.starts_with("a-b-c-64-"));
        assert!(name.ends_with(".svg"));
        assert_ne!(file_name(&request("a b.c")), name);
    }

    #[test]
    fn test_clamped_size() {
        assert_eq!(clamped_size(64), 64);
        assert_eq!(clamped_size(4), MIN_SIZE);
        assert_eq!(clamped_size(4000), MAX_SIZE);
    }

    #[test]
    fn test_write_avatar_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_avatar(&request("alice"), dir.path()).unwrap();
        let content = fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("<svg"));
        assert!(content.ends_with("</svg>"));
    }
}
