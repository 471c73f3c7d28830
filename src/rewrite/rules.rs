//! The rewrite catalog for a template copy.
//!
//! Anchors are built from [`TemplateIdentity`] and always include the
//! template's literal value, so a rewritten file no longer matches and a
//! second pass is a no-op.

use regex::escape;

use super::rule::{escape_expansion, FileRewrite, RewriteRule};
use crate::answers::AnswerRecord;
use crate::config::TemplateIdentity;
use crate::constants::{defaults, paths};
use crate::error::Result;

/// README sections that only describe the template itself.
const TEMPLATE_ONLY_SECTIONS: &[&str] = &["Why This Template?", "Quick Start"];

/// Renders `value` as a quoted string literal valid in both JSON and TOML.
fn quoted(value: &str) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

fn html_escape(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Removes a `"key": value` entry from a JSON object wherever it sits.
///
/// The first rule handles an entry followed by a sibling, the second one the
/// last entry of its object.
fn remove_json_entry(key: &str, value_pattern: &str) -> Result<Vec<RewriteRule>> {
    let entry = format!(r#""{}": {value_pattern}"#, escape(key));
    Ok(vec![
        RewriteRule::remove(&format!(r"\n[ \t]*{entry},"))?,
        RewriteRule::remove(&format!(r",\n[ \t]*{entry}"))?,
    ])
}

/// Builds every file rewrite for one setup run.
pub fn catalog(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<Vec<FileRewrite>> {
    let mut rewrites = vec![
        package_manifest(answers, identity)?,
        shell_manifest(answers, identity)?,
        native_manifest(answers, identity)?,
        native_main(answers, identity)?,
        index_html(answers, identity)?,
    ];
    if let Some(author) = &answers.author {
        rewrites.push(license(author)?);
    }
    rewrites.push(FileRewrite::new(
        paths::AGENTS_DOC,
        vec![RewriteRule::literal(&escape(&identity.identifier), &answers.bundle_identifier)?
            .everywhere()],
    ));
    rewrites.push(contributing(answers, identity)?);
    rewrites.push(readme(answers, identity)?);
    Ok(rewrites)
}

fn package_manifest(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    let name = escape(&identity.name);
    let command = escape(&identity.setup_command);

    let mut rules = vec![RewriteRule::literal(
        &format!(r#""name": "{name}""#),
        format!(r#""name": {}"#, quoted(&answers.project_name)?),
    )?];
    rules.extend(remove_json_entry("postinstall", &format!(r#""{command}""#))?);
    rules.extend(remove_json_entry("setup", &format!(r#""{command}""#))?);
    rules.extend(remove_json_entry("bin", r"\{[^}]*\}")?);
    for dependency in &identity.setup_dependencies {
        rules.extend(remove_json_entry(dependency, r#""[^"]+""#)?);
    }

    Ok(FileRewrite::new(paths::PACKAGE_JSON, rules))
}

fn shell_manifest(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    let name = escape(&identity.name);
    let endpoint = format!(
        "https://github.com/{}/{}/releases/latest/download/latest.json",
        identity.owner, identity.name
    );
    let new_endpoint = format!(
        "{}/releases/latest/download/latest.json",
        answers.repository_url()
    );

    Ok(FileRewrite::new(
        paths::TAURI_CONF,
        vec![
            RewriteRule::literal(
                &format!(r#""productName": "{name}""#),
                format!(r#""productName": {}"#, quoted(&answers.product_name)?),
            )?,
            RewriteRule::literal(
                &format!(r#""identifier": "{}""#, escape(&identity.identifier)),
                format!(r#""identifier": {}"#, quoted(&answers.bundle_identifier)?),
            )?,
            RewriteRule::literal(
                &format!(r#""title": "{name}""#),
                format!(r#""title": {}"#, quoted(&answers.product_name)?),
            )?,
            RewriteRule::literal(&escape(&quoted(&endpoint)?), quoted(&new_endpoint)?)?,
            RewriteRule::literal(
                &format!(r#""pubkey": "{}""#, escape(&identity.updater_pubkey)),
                format!(r#""pubkey": "{}""#, defaults::UPDATER_PUBKEY_PLACEHOLDER),
            )?,
        ],
    ))
}

fn native_manifest(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    let name = escape(&identity.name);
    let project = quoted(&answers.project_name)?;

    let mut rules = vec![
        RewriteRule::literal(&format!(r#"name = "{name}""#), format!("name = {project}"))?,
        RewriteRule::literal(
            &format!(r#"description = "{}""#, escape(&identity.native_description)),
            format!("description = {}", quoted(&answers.description)?),
        )?,
        RewriteRule::literal(
            &format!(r#"name = "{}""#, escape(&identity.library_name())),
            format!("name = {}", quoted(&answers.library_name())?),
        )?,
        RewriteRule::literal(
            &format!(r#"default-run = "{name}""#),
            format!("default-run = {project}"),
        )?,
        RewriteRule::expand(
            &format!(r#"(\[\[bin\]\]\r?\n)name = "{name}""#),
            format!("${{1}}name = {}", escape_expansion(&project)),
        )?,
    ];

    if let Some(author) = &answers.author {
        rules.push(RewriteRule::literal(
            &format!(r#"authors = \["{}"\]"#, escape(&identity.author_placeholder)),
            format!("authors = [{}]", quoted(author)?),
        )?);
    }

    Ok(FileRewrite::new(paths::NATIVE_MANIFEST, rules))
}

fn native_main(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    Ok(FileRewrite::new(
        paths::NATIVE_MAIN,
        vec![RewriteRule::literal(
            &format!(r"{}::run\(\)", escape(&identity.library_name())),
            format!("{}::run()", answers.library_name()),
        )?],
    ))
}

fn index_html(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    Ok(FileRewrite::new(
        paths::INDEX_HTML,
        vec![RewriteRule::literal(
            &format!("<title>{}</title>", escape(&identity.html_title)),
            format!("<title>{}</title>", html_escape(&answers.product_name)),
        )?],
    ))
}

/// Appends the author to the bare copyright line.
fn license(author: &str) -> Result<FileRewrite> {
    Ok(FileRewrite::new(
        paths::LICENSE,
        vec![RewriteRule::expand(
            r"(?m)^Copyright \(c\) (\d{4})[ \t]*$",
            format!("Copyright (c) ${{1}} {}", escape_expansion(author)),
        )?],
    ))
}

fn contributing(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    let name = escape(&identity.name);
    Ok(FileRewrite::new(
        paths::CONTRIBUTING,
        vec![RewriteRule::expand(
            &format!(
                r"git clone https://github\.com/{}/{name}\.git(\r?\n[ \t]*)cd {name}",
                escape(&identity.owner)
            ),
            format!(
                "git clone {}.git${{1}}cd {}",
                escape_expansion(&answers.repository_url()),
                escape_expansion(&answers.project_name)
            ),
        )?],
    ))
}

fn readme(answers: &AnswerRecord, identity: &TemplateIdentity) -> Result<FileRewrite> {
    let mut rules = vec![
        RewriteRule::remove(r"(?m)^\[!\[CI\]\(.*\r?\n")?,
        RewriteRule::literal(
            &format!(r"(?m)^# {}[ \t]*$", escape(&identity.readme_title)),
            format!("# {}", answers.product_name),
        )?,
        RewriteRule::literal(&escape(&identity.readme_description), &answers.description)?,
    ];
    for section in TEMPLATE_ONLY_SECTIONS {
        // Up to the next level-two heading, or the end of the document.
        rules.push(RewriteRule::expand(
            &format!(r"(?ms)^## {}[ \t]*\r?\n.*?(^## |\z)", escape(section)),
            "${1}",
        )?);
    }
    rules.push(RewriteRule::remove(r"(?m)^.*# Project initialization[ \t]*\r?\n")?);

    Ok(FileRewrite::new(paths::README, rules))
}

/// Points the agent configuration at the selected agents.
pub fn ruler_agents(agents: &[String]) -> Result<FileRewrite> {
    let list = serde_json::to_string(agents)?;
    Ok(FileRewrite::new(
        paths::RULER_CONFIG,
        vec![RewriteRule::literal(
            r"(?m)^default_agents\s*=\s*\[.*\]$",
            format!("default_agents = {list}"),
        )?],
    ))
}
