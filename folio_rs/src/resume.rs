//! Resume download through a transient anchor element.
//!
//! The browser only starts a download for an anchor that is attached to the
//! document, so the protocol is create, attach, click, detach. The anchor is
//! held by a guard that detaches it on every path, including a failed click.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::Result;

/// Static PDF served next to the site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeAsset {
    /// URL path of the asset
    pub href: String,
    /// Suggested file name for the download
    pub file_name: String,
}

impl Default for ResumeAsset {
    fn default() -> Self {
        Self {
            href: "/resume/Axel_Sundqvist_Resume.pdf".to_string(),
            file_name: "Axel_Sundqvist_Resume.pdf".to_string(),
        }
    }
}

/// Document operations needed for a download.
pub trait DownloadSurface {
    /// Detached anchor handle.
    type Anchor;

    /// Build an anchor with `href` and `download` set.
    fn create_anchor(&self, href: &str, file_name: &str) -> Result<Self::Anchor>;
    /// Append to the document body.
    fn attach(&self, anchor: &Self::Anchor) -> Result<()>;
    /// Dispatch a click.
    fn click(&self, anchor: &Self::Anchor) -> Result<()>;
    /// Remove from the document body.
    fn detach(&self, anchor: &Self::Anchor);
    /// Open `href` in a new tab.
    fn open_tab(&self, href: &str) -> Result<()>;
}

/// Optional analytics sink (a `gtag` global in the browser).
pub trait AnalyticsHook {
    /// Report an event.
    fn event(&self, action: &str, category: &str, label: &str, value: u32);
}

struct Attached<'a, S: DownloadSurface> {
    surface: &'a S,
    anchor: S::Anchor,
}

impl<S: DownloadSurface> Drop for Attached<'_, S> {
    fn drop(&mut self) {
        self.surface.detach(&self.anchor);
    }
}

/// Trigger a download of `asset` and report it to `analytics` if present.
pub fn download_resume<S: DownloadSurface>(
    surface: &S,
    asset: &ResumeAsset,
    analytics: Option<&dyn AnalyticsHook>,
) -> Result<()> {
    let anchor = surface.create_anchor(&asset.href, &asset.file_name)?;
    surface.attach(&anchor)?;
    let attached = Attached { surface, anchor };
    surface.click(&attached.anchor)?;
    drop(attached);

    if let Some(hook) = analytics {
        hook.event("download", "engagement", "resume_download", 1);
    }
    info!(href = %asset.href, "resume download initiated");
    Ok(())
}

/// Open the resume in a new tab instead of downloading it.
pub fn preview_resume<S: DownloadSurface>(surface: &S, asset: &ResumeAsset) -> Result<()> {
    debug!(href = %asset.href, "resume preview");
    surface.open_tab(&asset.href)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeDocument {
        created: RefCell<Vec<(String, String)>>,
        attached: RefCell<Vec<usize>>,
        clicks: Cell<usize>,
        tabs: RefCell<Vec<String>>,
        fail_click: bool,
    }

    impl DownloadSurface for FakeDocument {
        type Anchor = usize;

        fn create_anchor(&self, href: &str, file_name: &str) -> Result<usize> {
            let mut created = self.created.borrow_mut();
            created.push((href.to_string(), file_name.to_string()));
            Ok(created.len() - 1)
        }

        fn attach(&self, anchor: &usize) -> Result<()> {
            self.attached.borrow_mut().push(*anchor);
            Ok(())
        }

        fn click(&self, _anchor: &usize) -> Result<()> {
            if self.fail_click {
                return Err(Error::Surface("click blocked".into()));
            }
            self.clicks.set(self.clicks.get() + 1);
            Ok(())
        }

        fn detach(&self, anchor: &usize) {
            self.attached.borrow_mut().retain(|a| a != anchor);
        }

        fn open_tab(&self, href: &str) -> Result<()> {
            self.tabs.borrow_mut().push(href.to_string());
            Ok(())
        }
    }

    #[derive(Default)]
    struct Recorder(RefCell<Vec<String>>);

    impl AnalyticsHook for Recorder {
        fn event(&self, action: &str, category: &str, label: &str, value: u32) {
            self.0
                .borrow_mut()
                .push(format!("{action}/{category}/{label}/{value}"));
        }
    }

    #[test]
    fn creates_one_anchor_and_leaves_nothing_attached() {
        let doc = FakeDocument::default();
        let asset = ResumeAsset::default();
        download_resume(&doc, &asset, None).unwrap();

        assert_eq!(
            *doc.created.borrow(),
            vec![(asset.href.clone(), asset.file_name.clone())]
        );
        assert_eq!(doc.clicks.get(), 1);
        assert!(doc.attached.borrow().is_empty());
    }

    #[test]
    fn failed_click_still_detaches() {
        let doc = FakeDocument {
            fail_click: true,
            ..FakeDocument::default()
        };
        let analytics = Recorder::default();
        let result = download_resume(&doc, &ResumeAsset::default(), Some(&analytics));

        assert!(result.is_err());
        assert!(doc.attached.borrow().is_empty());
        assert!(analytics.0.borrow().is_empty());
    }

    #[test]
    fn reports_analytics_when_hook_present() {
        let doc = FakeDocument::default();
        let analytics = Recorder::default();
        download_resume(&doc, &ResumeAsset::default(), Some(&analytics)).unwrap();
        assert_eq!(
            *analytics.0.borrow(),
            vec!["download/engagement/resume_download/1".to_string()]
        );
    }

    #[test]
    fn preview_opens_a_tab() {
        let doc = FakeDocument::default();
        preview_resume(&doc, &ResumeAsset::default()).unwrap();
        assert_eq!(
            *doc.tabs.borrow(),
            vec!["/resume/Axel_Sundqvist_Resume.pdf".to_string()]
        );
        assert!(doc.created.borrow().is_empty());
    }
}
