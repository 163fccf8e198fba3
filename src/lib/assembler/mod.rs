//! Builds the social-preview metadata for a page and writes it into the
//! render's metadata sink.

use crate::{
    resolve::{ImageResolver, RootUrlProvider, resolve_image_url},
    sink::{MetadataSink, Namespace},
    types::{ImageUrl, PlainText},
};

pub const OG_TYPE: &str = "website";
pub const TWITTER_CARD: &str = "summary_large_image";

/// Raw options for one render, exactly as configured.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetadataConfig {
    pub title: String,
    pub description: String,
    pub image_site: String,
}

/// How the assembler treats keys that already hold a value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(test, derive(proptest_derive::Arbitrary))]
pub enum WritePolicy {
    /// Only fill keys whose current value is empty. First writer wins.
    #[default]
    Guarded,
    /// Replace whatever is there.
    Overwrite,
}

impl WritePolicy {
    pub fn from_overwrite(overwrite: bool) -> Self {
        if overwrite {
            WritePolicy::Overwrite
        } else {
            WritePolicy::Guarded
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagFamily {
    OpenGraph,
    Twitter,
    Generic,
}

impl TagFamily {
    pub const ALL: [TagFamily; 3] = [TagFamily::OpenGraph, TagFamily::Twitter, TagFamily::Generic];

    fn title_key(self) -> &'static str {
        match self {
            TagFamily::OpenGraph => "og:title",
            TagFamily::Twitter => "twitter:title",
            TagFamily::Generic => "title",
        }
    }

    fn description_key(self) -> &'static str {
        match self {
            TagFamily::OpenGraph => "og:description",
            TagFamily::Twitter => "twitter:description",
            TagFamily::Generic => "description",
        }
    }

    fn image_key(self) -> &'static str {
        match self {
            TagFamily::OpenGraph => "og:image",
            TagFamily::Twitter => "twitter:image",
            TagFamily::Generic => "image",
        }
    }

    /// Entries in the order the family writes them.
    fn entries(
        self,
        title: &PlainText,
        description: &PlainText,
        image: Option<&ImageUrl>,
    ) -> Vec<(&'static str, String)> {
        let mut out = Vec::with_capacity(4);
        match self {
            TagFamily::OpenGraph => {
                out.push((self.title_key(), title.to_string()));
                out.push((self.description_key(), description.to_string()));
                out.push(("og:type", OG_TYPE.to_string()));
            }
            TagFamily::Twitter => {
                out.push(("twitter:card", TWITTER_CARD.to_string()));
                out.push((self.title_key(), title.to_string()));
                out.push((self.description_key(), description.to_string()));
            }
            TagFamily::Generic => {
                out.push((self.title_key(), title.to_string()));
                out.push((self.description_key(), description.to_string()));
            }
        }
        if let Some(image) = image {
            out.push((self.image_key(), image.to_string()));
        }
        out
    }
}

pub struct MetadataAssembler<R, U> {
    resolver: R,
    root: U,
}

impl<R: ImageResolver, U: RootUrlProvider> MetadataAssembler<R, U> {
    pub fn new(resolver: R, root: U) -> Self {
        Self { resolver, root }
    }

    /// Sanitized candidate entries, Open Graph first, then Twitter, then
    /// generic. Image keys are absent when no image resolves.
    pub fn entries(&self, config: &MetadataConfig) -> Vec<(&'static str, String)> {
        let title = PlainText::sanitize(&config.title);
        let description = PlainText::sanitize(&config.description);
        let image = resolve_image_url(&config.image_site, &self.resolver, &self.root);

        TagFamily::ALL
            .iter()
            .flat_map(|family| family.entries(&title, &description, image.as_ref()))
            .collect()
    }

    pub fn apply<S: MetadataSink + ?Sized>(
        &self,
        config: &MetadataConfig,
        sink: &mut S,
        overwrite: bool,
    ) {
        self.apply_with(config, sink, WritePolicy::from_overwrite(overwrite));
    }

    pub fn apply_with<S: MetadataSink + ?Sized>(
        &self,
        config: &MetadataConfig,
        sink: &mut S,
        policy: WritePolicy,
    ) {
        for (key, value) in self.entries(config) {
            let writable = match policy {
                WritePolicy::Overwrite => true,
                WritePolicy::Guarded => sink.get(key, Namespace::Property).is_empty(),
            };
            if writable {
                sink.set(key, &value, Namespace::Property);
            }
        }
    }
}
