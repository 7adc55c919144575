//! Static site builder.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::error::SiteError;
use crate::site::Site;
use crate::template::{IndexData, PostPageData, render_index, render_post_page};

/// Configuration for static site building.
#[derive(Clone, Debug)]
pub struct BuildConfig {
    /// Heading of the listing page.
    pub site_title: String,
    /// Subheading of the listing page.
    pub site_description: String,
}

/// A post that could not be built.
#[derive(Debug)]
pub struct FailedPost {
    pub id: String,
    pub error: SiteError,
}

/// Outcome of a build.
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Files written, listing page first.
    pub written: Vec<PathBuf>,
    /// Posts skipped because rendering or writing failed.
    pub failed: Vec<FailedPost>,
}

/// Writes the listing page and one page per published post.
pub struct StaticSiteBuilder {
    site: Site,
    config: BuildConfig,
}

impl StaticSiteBuilder {
    #[must_use]
    pub fn new(site: Site, config: BuildConfig) -> Self {
        Self { site, config }
    }

    /// Build the site into `output_dir`.
    ///
    /// Writes `index.html` and `posts/<id>/index.html`. Only listing and
    /// index write failures are returned as errors; a failing post is
    /// recorded in the report and the build continues.
    pub fn build(&self, output_dir: &Path) -> Result<BuildReport, SiteError> {
        let posts = self.site.list_posts()?;
        let mut report = BuildReport::default();

        fs::create_dir_all(output_dir)?;
        let index_path = output_dir.join("index.html");
        let index = render_index(&IndexData {
            site_title: &self.config.site_title,
            site_description: &self.config.site_description,
            posts: &posts,
        });
        fs::write(&index_path, index)?;
        report.written.push(index_path);

        for post in &posts {
            match self.build_post(&post.id, output_dir) {
                Ok(path) => report.written.push(path),
                Err(error) => {
                    warn!("Skipping post {}: {}", post.id, error);
                    report.failed.push(FailedPost {
                        id: post.id.clone(),
                        error,
                    });
                }
            }
        }

        info!(
            "Built {} pages into {} ({} failed)",
            report.written.len(),
            output_dir.display(),
            report.failed.len()
        );
        Ok(report)
    }

    fn build_post(&self, id: &str, output_dir: &Path) -> Result<PathBuf, SiteError> {
        validate_id(id)?;
        let rendered = self.site.render_post(id)?;
        let html = render_post_page(&PostPageData {
            post: &rendered.post,
            html_content: &rendered.content.html,
            toc: &rendered.content.toc,
        });

        let dir = output_dir.join("posts").join(id);
        fs::create_dir_all(&dir)?;
        let path = dir.join("index.html");
        fs::write(&path, html)?;
        Ok(path)
    }
}

/// Reject IDs that would escape their directory.
fn validate_id(id: &str) -> Result<(), SiteError> {
    if id.is_empty() || id.contains(['/', '\\']) || id.contains("..") {
        return Err(SiteError::InvalidId(id.to_owned()));
    }
    Ok(())
}
