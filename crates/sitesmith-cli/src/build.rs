use anyhow::{Context, Result};
use sitesmith_config::SiteConfig;
use std::fs;
use std::path::{Path, PathBuf};

use crate::copy::{CopyStats, copy_static_dir};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    pub assets: CopyStats,
    pub pages: usize,
}

/// Rebuilds `public_dir` from scratch: static assets first, then one `.html`
/// page per markdown file under `content_dir`, keeping the relative layout.
pub fn build_site(config: &SiteConfig) -> Result<BuildStats> {
    let assets = copy_static_dir(&config.static_dir, &config.public_dir)?;

    if !config.content_dir.is_dir() {
        log::warn!(
            "Content directory {} not found, no pages generated",
            config.content_dir.display()
        );
        return Ok(BuildStats { assets, pages: 0 });
    }

    let mut pages = 0;
    for source in find_markdown_files(&config.content_dir)? {
        let relative = source
            .strip_prefix(&config.content_dir)
            .with_context(|| format!("{} is outside the content directory", source.display()))?;
        let target = config.public_dir.join(relative).with_extension("html");
        render_page(&source, &target)?;
        pages += 1;
    }

    Ok(BuildStats { assets, pages })
}

/// Renders one markdown file to its HTML string.
pub fn render_file(source: &Path) -> Result<String> {
    let markdown =
        fs::read_to_string(source).with_context(|| format!("reading {}", source.display()))?;
    let html = sitesmith_engine::markdown_to_html(&markdown)
        .with_context(|| format!("converting {}", source.display()))?;
    Ok(html)
}

fn render_page(source: &Path, target: &Path) -> Result<()> {
    let html = render_file(source)?;

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {}", parent.display()))?;
    }
    fs::write(target, html).with_context(|| format!("writing {}", target.display()))?;
    log::info!("Generated {} -> {}", source.display(), target.display());
    Ok(())
}

fn find_markdown_files(content_dir: &Path) -> Result<Vec<PathBuf>> {
    let root = glob::Pattern::escape(&content_dir.to_string_lossy());
    let pattern = format!("{root}/**/*.md");

    let mut files = glob::glob(&pattern)
        .with_context(|| format!("invalid content pattern {pattern}"))?
        .collect::<Result<Vec<_>, _>>()?;
    files.sort();
    Ok(files)
}
