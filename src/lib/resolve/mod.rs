//! Host collaborators used to turn a configured image reference into an
//! absolute URL.

use crate::types::ImageUrl;

/// Turns a configured image reference into the path the host would render.
///
/// The returned path may carry a `#...` suffix; it is discarded later.
pub trait ImageResolver {
    fn resolve(&self, reference: &str) -> String;
}

/// Absolute root URL of the site being rendered.
pub trait RootUrlProvider {
    fn root_url(&self) -> &str;
}

impl<T: ImageResolver + ?Sized> ImageResolver for &T {
    fn resolve(&self, reference: &str) -> String {
        (**self).resolve(reference)
    }
}

impl<T: RootUrlProvider + ?Sized> RootUrlProvider for &T {
    fn root_url(&self) -> &str {
        (**self).root_url()
    }
}

/// Media-field values already hold the image path, optionally followed by
/// `#` and the media manager's own metadata.
#[derive(Clone, Copy, Debug, Default)]
pub struct MediaPathResolver;

impl ImageResolver for MediaPathResolver {
    fn resolve(&self, reference: &str) -> String {
        reference.trim().to_string()
    }
}

/// Fixed root URL, normalised to end with `/`.
///
/// A blank URL becomes `/`, which resolves no image at all.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteRoot(String);

impl SiteRoot {
    pub fn new(url: &str) -> Self {
        Self(format!("{}/", url.trim().trim_end_matches('/')))
    }
}

impl RootUrlProvider for SiteRoot {
    fn root_url(&self) -> &str {
        &self.0
    }
}

/// Resolve an image reference to an absolute URL. Empty references yield
/// `None` without consulting the resolver.
pub fn resolve_image_url(
    reference: &str,
    resolver: &impl ImageResolver,
    root: &impl RootUrlProvider,
) -> Option<ImageUrl> {
    if reference.trim().is_empty() {
        return None;
    }
    ImageUrl::resolve(&resolver.resolve(reference), root.root_url())
}
