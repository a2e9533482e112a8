//! Avatar HTTP server.
//!
//! Serves `GET /avatar/:seed/:size/:version.svg` with year-long immutable
//! caching, plus a demo page and the inline-avatar client runtime. Every
//! failed avatar request - disabled feature, malformed seed, bad size -
//! degrades to the embedded fallback image instead of an error status.

mod response;
mod route;

pub use route::AvatarRoute;

use crate::avatar::RenderRequest;
use crate::config::{Config, cfg, reload_config};
use crate::embed::serve::{DEMO_HTML, DemoVars, RUNTIME_JS};
use crate::seed::{AvatarUrlSource, NameDirectory, SeedResolver};
use crate::utils::xml::escape;
use crate::{debug, log};
use anyhow::Result;
use std::fmt::Write as _;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use tiny_http::{Method, Request, Server};

/// How many consecutive ports to try when the configured one is taken.
const BIND_ATTEMPTS: u16 = 10;

/// Poll cadence for config and names-file changes.
const WATCH_INTERVAL: Duration = Duration::from_secs(2);

/// Seeds shown on the demo page.
const SAMPLE_SEEDS: [&str; 12] = [
    "alice", "bob", "carol", "dave", "erin", "frank", "grace", "heidi", "ivan", "judy",
    "mallory", "oscar",
];

/// Bind the server and run the request loop until Ctrl+C.
pub fn serve(config: &Config) -> Result<()> {
    let resolver = Arc::new(SeedResolver::new());
    resolver.set_directory(load_directory(config));

    let (server, addr) = bind_with_retry(config.serve.interface, config.serve.port)?;
    let server = Arc::new(server);
    crate::core::register_server(Arc::clone(&server));

    log!("serve"; "http://{}", addr);

    if config.serve.watch {
        spawn_watcher(Arc::clone(&resolver));
    }

    run_request_loop(&server, &resolver);
    Ok(())
}

/// Bind to the configured port, walking forward when it is taken.
fn bind_with_retry(interface: IpAddr, port: u16) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;
    for offset in 0..BIND_ATTEMPTS {
        let Some(candidate) = port.checked_add(offset) else {
            break;
        };
        let addr = SocketAddr::new(interface, candidate);
        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {port} in use, bound {candidate}");
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow::anyhow!(
        "failed to bind {}:{}..{}: {}",
        interface,
        port,
        port.saturating_add(BIND_ATTEMPTS),
        last_error.map_or_else(|| "no ports tried".to_string(), |e| e.to_string())
    ))
}

/// Load the configured names directory, degrading to none on failure.
fn load_directory(config: &Config) -> Option<NameDirectory> {
    let path = config.serve.names_file.as_ref()?;
    match NameDirectory::load(path) {
        Ok(directory) => Some(directory),
        Err(e) => {
            log!("warning"; "names file unusable: {e:#}");
            None
        }
    }
}

/// Poll for config and names-file changes while serving.
///
/// A config change swaps the global snapshot and drops the whole seed cache
/// (any option can move any seed); a names-file change invalidates exactly
/// the usernames whose display name moved.
fn spawn_watcher(resolver: Arc<SeedResolver>) {
    std::thread::spawn(move || {
        let mut names_hash = current_names_hash();

        while !crate::core::is_shutdown() {
            std::thread::sleep(WATCH_INTERVAL);

            match reload_config() {
                Ok(true) => {
                    resolver.clear();
                    let config = cfg();
                    resolver.set_directory(load_directory(&config));
                    names_hash = current_names_hash();
                    log!(
                        "serve";
                        "configuration reloaded (settings version {})",
                        config.settings_version()
                    );
                    continue;
                }
                Ok(false) => {}
                Err(e) => {
                    log!("warning"; "config reload failed: {e:#}");
                    continue;
                }
            }

            let hash = current_names_hash();
            if hash != names_hash {
                names_hash = hash;
                let config = cfg();
                resolver.set_directory(load_directory(&config));
                debug!("serve"; "names directory reloaded");
            }
        }
    });
}

/// Content hash of the configured names file (0 when absent).
fn current_names_hash() -> u64 {
    let config = cfg();
    let Some(path) = &config.serve.names_file else {
        return 0;
    };
    std::fs::read(path)
        .map(|content| crate::utils::hash::compute(&content))
        .unwrap_or(0)
}

fn run_request_loop(server: &Server, resolver: &Arc<SeedResolver>) {
    // Thread pool keeps one slow render from blocking other requests
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(4)
        .build()
        .expect("failed to create thread pool");

    for request in server.incoming_requests() {
        let resolver = Arc::clone(resolver);
        pool.spawn(move || {
            if let Err(e) = handle_request(request, &resolver) {
                log!("serve"; "request error: {e}");
            }
        });
    }
}

/// Handle a single HTTP request
fn handle_request(request: Request, resolver: &SeedResolver) -> Result<()> {
    if crate::core::is_shutdown() {
        return response::respond_unavailable(request);
    }

    let config = cfg();
    let url = request.url().to_string();
    let path = url.split('?').next().unwrap_or("");

    match path {
        "/" => respond_demo(request, &config),
        "/runtime.js" => response::respond_runtime_js(request, RUNTIME_JS),
        _ => {
            if config.avatar.enabled
                && request.method() == &Method::Get
                && let Some(route) = route::parse(&url)
            {
                respond_avatar(request, &route, &config, resolver)
            } else {
                // Disabled feature, bad route, bad size, bad method: always
                // the fallback image, never an error status.
                response::respond_fallback(request)
            }
        }
    }
}

/// Render and send one avatar, honoring conditional requests.
fn respond_avatar(
    request: Request,
    route: &AvatarRoute,
    config: &Config,
    resolver: &SeedResolver,
) -> Result<()> {
    let seed = resolver.resolve(
        &route.username,
        config.avatar.hash_source(),
        config.serve.names_enabled,
    );
    let etag = avatar_etag(&config.settings_version(), &route.username, &seed, route.size);

    if response::etag_matches(&request, &etag) {
        return response::respond_not_modified(request, &etag);
    }

    let render = RenderRequest::new(seed, route.size, config.render_options());
    response::respond_svg(request, render.to_svg(), &etag)
}

/// Strong ETag over everything that shapes the response bytes.
fn avatar_etag(settings_version: &str, username: &str, seed: &str, size: u32) -> String {
    let payload = format!("{settings_version}|{username}|{seed}|{size}");
    format!("\"{}\"", crate::utils::hash::fingerprint(&payload, 16))
}

/// Demo page: a grid of sample avatars wired to the client runtime.
fn respond_demo(request: Request, config: &Config) -> Result<()> {
    let source = AvatarUrlSource::select(config.avatar.enabled, config.settings_version());

    let mut grid = String::new();
    for seed in SAMPLE_SEEDS {
        let url = source.url_for(seed).replace("{size}", "96");
        let _ = write!(
            grid,
            r#"<figure><img src="{url}" width="96" height="96" alt="{seed}"><figcaption>{}</figcaption></figure>"#,
            escape(seed),
        );
    }

    let html = DEMO_HTML.render(&DemoVars {
        settings_version: config.settings_version(),
        avatar_grid: grid,
    });
    response::respond_html(request, html)
}
