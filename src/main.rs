use std::{env, path::PathBuf};

use color_eyre::eyre::eyre;
use libsocialmeta::{
    config::{PluginParams, site_meta},
    plugin::{MetadataPlugin, PageRender, RenderHook},
    resolve::{MediaPathResolver, SiteRoot},
};
use tracing::debug;

const USAGE: &str = "usage: socialmeta <params-file> [--overwrite]";

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let mut params_path: Option<PathBuf> = None;
    let mut force_overwrite = false;
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--overwrite" => force_overwrite = true,
            "-h" | "--help" => {
                println!("{USAGE}");
                return Ok(());
            }
            _ if params_path.is_none() => params_path = Some(PathBuf::from(arg)),
            _ => return Err(eyre!("Unexpected argument {arg:?}\n{USAGE}")),
        }
    }

    let params_path = params_path.ok_or_else(|| eyre!("Missing params file\n{USAGE}"))?;
    let mut params = PluginParams::load(&params_path)?;
    params.overwrite |= force_overwrite;

    let site = site_meta();
    debug!(base_url = %site.base_url, "rendering social metadata");

    let plugin = MetadataPlugin::new(params, MediaPathResolver, SiteRoot::new(&site.base_url));
    let mut page = PageRender::interactive();
    plugin.on_render_trigger(&mut page);

    println!("{}", page.meta().to_html());

    Ok(())
}
