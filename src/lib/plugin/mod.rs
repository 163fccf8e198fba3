//! Glue between the host's render dispatcher and the assembler.

use tracing::debug;

use crate::{
    assembler::MetadataAssembler,
    config::PluginParams,
    resolve::{ImageResolver, RootUrlProvider},
    sink::{MetaStore, MetadataSink},
};

/// What the host exposes to a hook for the page currently being rendered.
pub trait RenderContext {
    /// False for command-line and background runs that produce no page.
    fn is_interactive(&self) -> bool;

    fn sink_mut(&mut self) -> &mut dyn MetadataSink;
}

/// A component the host calls once per page render.
pub trait RenderHook {
    fn on_render_trigger(&self, ctx: &mut dyn RenderContext);
}

pub struct MetadataPlugin<R, U> {
    params: PluginParams,
    assembler: MetadataAssembler<R, U>,
}

impl<R: ImageResolver, U: RootUrlProvider> MetadataPlugin<R, U> {
    pub fn new(params: PluginParams, resolver: R, root: U) -> Self {
        Self {
            params,
            assembler: MetadataAssembler::new(resolver, root),
        }
    }
}

impl<R: ImageResolver, U: RootUrlProvider> RenderHook for MetadataPlugin<R, U> {
    fn on_render_trigger(&self, ctx: &mut dyn RenderContext) {
        if !ctx.is_interactive() {
            debug!("skipping social metadata outside an interactive render");
            return;
        }

        let policy = self.params.write_policy();
        self.assembler
            .apply_with(&self.params.metadata_config(), ctx.sink_mut(), policy);
        debug!(?policy, "applied social metadata");
    }
}

/// A single page render owning its metadata.
#[derive(Debug, Default)]
pub struct PageRender {
    interactive: bool,
    meta: MetaStore,
}

impl PageRender {
    pub fn interactive() -> Self {
        Self {
            interactive: true,
            meta: MetaStore::new(),
        }
    }

    pub fn background() -> Self {
        Self::default()
    }

    pub fn meta(&self) -> &MetaStore {
        &self.meta
    }

    pub fn meta_mut(&mut self) -> &mut MetaStore {
        &mut self.meta
    }

    pub fn into_meta(self) -> MetaStore {
        self.meta
    }
}

impl RenderContext for PageRender {
    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn sink_mut(&mut self) -> &mut dyn MetadataSink {
        &mut self.meta
    }
}
