use crate::application::dto::{ComparisonResult, PackageStats, SearchResults};
use crate::application::read_models::{Report, ReportBody, ReportMetadataView};
use crate::ports::outbound::ReportFormatter;
use crate::shared::Result;
use crate::stats_analysis::domain::{
    DependencyNode, DependencyTreeResult, DownloadBucket, GitHubData, Granularity, PackageMetadata,
};
use crate::stats_analysis::services::number_format::{
    format_bytes, format_date, format_date_range, format_growth_rate, format_number,
    format_number_full,
};
use chrono::NaiveDate;

/// Markdown table header for two-column key/value tables
const FIELD_TABLE_HEADER: &str = "| Field | Value |\n";

/// Markdown table separator line for key/value tables
const FIELD_TABLE_SEPARATOR: &str = "|-------|-------|\n";

/// MarkdownFormatter adapter for human-readable reports
///
/// Renders each report kind as headings and tables. The dependency tree
/// becomes a nested list where dependencies below the depth limit are
/// shown with their declared range and marked as not resolved.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    /// Markdown link to the package page on npmjs.com
    fn package_link(name: &str) -> String {
        format!(
            "[{}](https://www.npmjs.com/package/{})",
            Self::escape_markdown_table_cell(name),
            name
        )
    }

    fn bucket_label(key: NaiveDate, granularity: Granularity) -> String {
        match granularity {
            Granularity::Daily => format_date(key),
            Granularity::Weekly => format!("Week of {}", format_date(key)),
            Granularity::Monthly => key.format("%b %Y").to_string(),
        }
    }

    fn push_field(output: &mut String, field: &str, value: &str) {
        output.push_str(&format!(
            "| {} | {} |\n",
            field,
            Self::escape_markdown_table_cell(value)
        ));
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_stats(&self, output: &mut String, stats: &PackageStats) {
        output.push_str(&format!(
            "# Download statistics: {}\n\n",
            Self::package_link(&stats.package_name)
        ));
        output.push_str(&format!("Period: {}\n\n", format_date_range(&stats.range)));

        output.push_str(FIELD_TABLE_HEADER);
        output.push_str(FIELD_TABLE_SEPARATOR);
        let summary = &stats.summary;
        Self::push_field(
            output,
            "Total downloads",
            &format_number_full(summary.total_downloads),
        );
        Self::push_field(
            output,
            "Daily average",
            &format_number_full(summary.daily_average),
        );
        if let Some(peak) = &summary.peak_day {
            Self::push_field(
                output,
                "Peak day",
                &format!("{} ({})", format_date(peak.date), format_number_full(peak.downloads)),
            );
        }
        Self::push_field(
            output,
            "Growth vs previous period",
            &format_growth_rate(summary.growth_rate),
        );
        Self::push_field(
            output,
            "Latest version",
            stats.latest_version.as_deref().unwrap_or("N/A"),
        );
        Self::push_field(
            output,
            "Last updated",
            stats.last_modified.as_deref().unwrap_or("N/A"),
        );
        output.push('\n');

        self.render_buckets(output, &stats.buckets, stats.granularity);

        if !stats.version_downloads.is_empty() {
            output.push_str("## Top versions (last week)\n\n");
            output.push_str("| Version | Downloads | Share |\n");
            output.push_str("|---------|-----------|-------|\n");
            for version in &stats.version_downloads {
                output.push_str(&format!(
                    "| {} | {} | {:.1}% |\n",
                    Self::escape_markdown_table_cell(&version.version),
                    format_number_full(version.downloads),
                    version.percentage
                ));
            }
            output.push('\n');
        }

        if !stats.version_releases.is_empty() {
            output.push_str("## Releases in period\n\n");
            output.push_str("| Version | Date | Type |\n");
            output.push_str("|---------|------|------|\n");
            for release in &stats.version_releases {
                output.push_str(&format!(
                    "| {} | {} | {} |\n",
                    Self::escape_markdown_table_cell(&release.version),
                    format_date(release.date),
                    release.version_type.label()
                ));
            }
            output.push('\n');
        }
    }

    fn render_buckets(
        &self,
        output: &mut String,
        buckets: &[DownloadBucket],
        granularity: Granularity,
    ) {
        output.push_str(&format!("## Downloads ({})\n\n", granularity));
        if buckets.is_empty() {
            output.push_str("No downloads recorded in this period.\n\n");
            return;
        }
        output.push_str("| Period | Downloads |\n");
        output.push_str("|--------|-----------|\n");
        for bucket in buckets {
            output.push_str(&format!(
                "| {} | {} |\n",
                Self::bucket_label(bucket.key, granularity),
                format_number_full(bucket.downloads)
            ));
        }
        output.push('\n');
    }

    fn render_tree(&self, output: &mut String, tree: &DependencyTreeResult) {
        let root = tree.root();
        output.push_str(&format!(
            "# Dependency tree: {}@{}\n\n",
            Self::escape_markdown_table_cell(&root.name),
            root.version
        ));
        output.push_str(&format!(
            "Max depth: {} | Declared dependencies: {} | Packages shown: {}\n\n",
            tree.max_depth(),
            tree.total_dependencies(),
            root.node_count()
        ));

        if !root.has_dependencies() {
            output.push_str("No runtime dependencies.\n\n");
            return;
        }
        for child in &root.dependencies {
            Self::render_tree_node(output, child, 2, tree.max_depth());
        }
        output.push('\n');
    }

    /// Renders one node as a list item; the root's children sit at level 2
    fn render_tree_node(
        output: &mut String,
        node: &DependencyNode,
        level: usize,
        max_depth: usize,
    ) {
        let indent = "  ".repeat(level - 2);
        if level > max_depth {
            output.push_str(&format!(
                "{}- {} `{}` _(not resolved)_\n",
                indent, node.name, node.version
            ));
        } else {
            output.push_str(&format!("{}- {} `{}`\n", indent, node.name, node.version));
        }
        for child in &node.dependencies {
            Self::render_tree_node(output, child, level + 1, max_depth);
        }
    }

    fn render_metadata(&self, output: &mut String, metadata: &PackageMetadata) {
        output.push_str(&format!(
            "# Package metadata: {}\n\n",
            Self::package_link(&metadata.name)
        ));
        if let Some(description) = &metadata.description {
            output.push_str(&format!("{}\n\n", description));
        }

        output.push_str(FIELD_TABLE_HEADER);
        output.push_str(FIELD_TABLE_SEPARATOR);
        Self::push_field(
            output,
            "Latest version",
            metadata.latest_version.as_deref().unwrap_or("N/A"),
        );
        Self::push_field(output, "License", metadata.license.as_deref().unwrap_or("N/A"));
        Self::push_field(output, "Homepage", metadata.homepage.as_deref().unwrap_or("N/A"));
        Self::push_field(
            output,
            "TypeScript",
            if metadata.has_typescript { "Yes" } else { "No" },
        );
        if !metadata.keywords.is_empty() {
            Self::push_field(output, "Keywords", &metadata.keywords.join(", "));
        }
        if !metadata.maintainers.is_empty() {
            let names: Vec<&str> = metadata.maintainers.iter().map(|m| m.name.as_str()).collect();
            Self::push_field(output, "Maintainers", &names.join(", "));
        }
        output.push('\n');

        if let Some(score) = &metadata.npms_score {
            output.push_str("## npms.io score\n\n");
            output.push_str("| Overall | Quality | Popularity | Maintenance |\n");
            output.push_str("|---------|---------|------------|-------------|\n");
            output.push_str(&format!(
                "| {}% | {}% | {}% | {}% |\n\n",
                score.overall, score.quality, score.popularity, score.maintenance
            ));
        }

        if let Some(bundle) = &metadata.bundle_size {
            output.push_str("## Bundle size\n\n");
            output.push_str(FIELD_TABLE_HEADER);
            output.push_str(FIELD_TABLE_SEPARATOR);
            Self::push_field(output, "Minified", &format_bytes(bundle.size));
            Self::push_field(output, "Minified + gzip", &format_bytes(bundle.gzip));
            Self::push_field(
                output,
                "Tree-shakeable",
                if bundle.has_js_module || bundle.has_js_next {
                    "Yes"
                } else {
                    "No"
                },
            );
            Self::push_field(
                output,
                "Side effects",
                if bundle.has_side_effects { "Yes" } else { "No" },
            );
            output.push('\n');
        }

        if let Some(cadence) = &metadata.release_cadence {
            output.push_str("## Release cadence\n\n");
            output.push_str(&format!(
                "{} releases, one every {} days on average. Last release: {}.\n\n",
                cadence.total_releases,
                cadence.average_days_between_releases,
                format_date(cadence.last_release_date)
            ));
        }

        if let Some(github) = &metadata.github {
            self.render_github(output, github);
        }
    }

    fn render_github(&self, output: &mut String, github: &GitHubData) {
        output.push_str("## GitHub\n\n");
        output.push_str("| Stars | Forks | Open issues | Watchers | Default branch |\n");
        output.push_str("|-------|-------|-------------|----------|----------------|\n");
        output.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n\n",
            format_number(github.stars),
            format_number(github.forks),
            format_number_full(github.open_issues),
            format_number(github.watchers),
            Self::escape_markdown_table_cell(&github.default_branch)
        ));

        if !github.contributors.is_empty() {
            output.push_str("### Top contributors\n\n");
            output.push_str("| Contributor | Contributions |\n");
            output.push_str("|-------------|---------------|\n");
            for contributor in &github.contributors {
                output.push_str(&format!(
                    "| [{}]({}) | {} |\n",
                    Self::escape_markdown_table_cell(&contributor.login),
                    contributor.html_url,
                    format_number_full(contributor.contributions)
                ));
            }
            output.push('\n');
        }
    }

    fn render_search(&self, output: &mut String, results: &SearchResults) {
        output.push_str(&format!(
            "# Search results: {}\n\n",
            Self::escape_markdown_table_cell(&results.query)
        ));
        if results.hits.is_empty() {
            output.push_str("No packages found.\n\n");
            return;
        }
        output.push_str("| Package | Version | Description |\n");
        output.push_str("|---------|---------|-------------|\n");
        for hit in &results.hits {
            output.push_str(&format!(
                "| {} | {} | {} |\n",
                Self::package_link(&hit.name),
                Self::escape_markdown_table_cell(&hit.version),
                Self::escape_markdown_table_cell(hit.description.as_deref().unwrap_or(""))
            ));
        }
        output.push('\n');
    }

    fn render_comparison(&self, output: &mut String, comparison: &ComparisonResult) {
        output.push_str("# Package comparison\n\n");
        output.push_str(&format!("Period: {}\n\n", format_date_range(&comparison.range)));

        output.push_str(
            "| Package | Total downloads | Daily average | Growth | Latest version |\n",
        );
        output.push_str(
            "|---------|-----------------|---------------|--------|----------------|\n",
        );
        for stats in &comparison.packages {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} |\n",
                Self::package_link(&stats.package_name),
                format_number_full(stats.summary.total_downloads),
                format_number_full(stats.summary.daily_average),
                format_growth_rate(stats.summary.growth_rate),
                stats.latest_version.as_deref().unwrap_or("N/A")
            ));
        }
        output.push('\n');

        if !comparison.series.is_empty() {
            let names: Vec<&str> = comparison
                .packages
                .iter()
                .map(|p| p.package_name.as_str())
                .collect();

            output.push_str(&format!("## Downloads ({})\n\n", comparison.granularity));
            output.push_str(&format!("| Period | {} |\n", names.join(" | ")));
            output.push_str(&format!("|--------|{}\n", "------|".repeat(names.len())));
            for bucket in &comparison.series {
                let cells: Vec<String> = names
                    .iter()
                    .map(|name| {
                        format_number_full(bucket.downloads.get(*name).copied().unwrap_or(0))
                    })
                    .collect();
                output.push_str(&format!(
                    "| {} | {} |\n",
                    Self::bucket_label(bucket.key, comparison.granularity),
                    cells.join(" | ")
                ));
            }
            output.push('\n');
        }

        if !comparison.failed.is_empty() {
            output.push_str("## Skipped packages\n\n");
            for failed in &comparison.failed {
                let reason = failed.error.lines().next().unwrap_or_default();
                output.push_str(&format!("- {}: {}\n", failed.name, reason));
            }
            output.push('\n');
        }
    }

    fn render_footer(&self, output: &mut String, metadata: &ReportMetadataView) {
        output.push_str(&format!(
            "---\n\n_Generated by {} {} on {}_\n",
            metadata.tool_name, metadata.tool_version, metadata.generated_at
        ));
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut output = String::new();

        match &report.body {
            ReportBody::Stats(stats) => self.render_stats(&mut output, stats),
            ReportBody::DependencyTree(tree) => self.render_tree(&mut output, tree),
            ReportBody::Metadata(metadata) => self.render_metadata(&mut output, metadata),
            ReportBody::Search(results) => self.render_search(&mut output, results),
            ReportBody::Comparison(comparison) => self.render_comparison(&mut output, comparison),
        }

        self.render_footer(&mut output, &report.metadata);
        Ok(output)
    }
}
