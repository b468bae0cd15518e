use crate::core::{IdleMode, Site, SiteConfig};
use crate::host::{dispatch, App};
use crate::{dom, events, surface};
use instant::Instant;
use rand::rngs::StdRng;
use rand::SeedableRng;
use wasm_bindgen::prelude::*;
use web_sys as web;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("curupira-web starting... beware");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

/// Read `data-idle-mode` and `data-seed` off `<body>`.
fn read_body_config(body: Option<&web::HtmlElement>) -> (SiteConfig, Option<u64>) {
    let mut config = SiteConfig::default();
    let Some(body) = body else {
        return (config, None);
    };
    if let Some(mode) = body.get_attribute("data-idle-mode") {
        match mode.parse::<IdleMode>() {
            Ok(mode) => config = config.with_idle_mode(mode),
            Err(e) => log::warn!("[init] {e}"),
        }
    }
    let seed = body
        .get_attribute("data-seed")
        .and_then(|s| s.trim().parse::<u64>().ok());
    (config, seed)
}

fn init() -> anyhow::Result<()> {
    let started = Instant::now();
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let body = document.body();
    if body.is_none() {
        anyhow::bail!("missing <body>");
    }

    let (config, seed) = read_body_config(body.as_ref());
    log::info!("[init] idle mode {:?}, seed {:?}", config.idle_mode, seed);
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    surface::inject_styles(&document);

    let site = Site::new(config, rng, started.elapsed());
    let app = App::new_shared(site, document.clone(), started);
    dispatch(&app, |site, host, _| site.boot(host));
    events::wire_all(&app, &document);
    Ok(())
}
