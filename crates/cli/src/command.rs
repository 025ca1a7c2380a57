use crate::Action;
use anyhow::Result;
use langual_thesaurus::{
    DescriptorRecord, Presenter, QueryResolver, Resolution, ThesaurusConfig, ThesaurusIndex,
    TreeNavigator,
};
use serde_json::json;

/// Execute `action` against a loaded index and return what should go to stdout.
pub(crate) fn run(
    index: &ThesaurusIndex,
    config: &ThesaurusConfig,
    action: &Action,
    json_output: bool,
) -> Result<String> {
    let navigator = TreeNavigator::new(index);
    let resolver = QueryResolver::new(index);
    let presenter = Presenter::new(config.indent_width);

    match action {
        Action::Search { term, with_tree } => {
            let resolution = resolver.resolve(term);
            render(&presenter, &navigator, term, &resolution, *with_tree, json_output)
        }
        Action::Contains { term } => {
            let resolution = resolver.contains(term);
            render(&presenter, &navigator, term, &resolution, false, json_output)
        }
        Action::Tree { term } => {
            let resolution = resolver.resolve(term);
            render(&presenter, &navigator, term, &resolution, true, json_output)
        }
        Action::Children { term } => {
            let resolution = resolver.resolve(term);
            let children = navigator.children_of_many(&resolution.matches());
            listing(&presenter, term, &resolution, &children, json_output)
        }
        Action::Descendants { term } => {
            let resolution = resolver.resolve(term);
            let descendants = navigator.descendants_closure(&resolution.matches());
            listing(&presenter, term, &resolution, &descendants, json_output)
        }
        Action::IsDescendant {
            candidate,
            ancestors,
        } => is_descendant(&navigator, candidate, ancestors, json_output),
        Action::Stats => {
            let stats = index.stats();
            if json_output {
                Ok(format!("{}\n", serde_json::to_string_pretty(&stats)?))
            } else {
                Ok(format!(
                    "records: {}\nedges: {}\nleaves: {}\n",
                    stats.records, stats.edges, stats.leaves
                ))
            }
        }
    }
}

fn render<'a>(
    presenter: &Presenter,
    navigator: &TreeNavigator<'a>,
    term: &str,
    resolution: &Resolution<'a>,
    with_tree: bool,
    json_output: bool,
) -> Result<String> {
    if json_output {
        let report = presenter.report(navigator, term, resolution, with_tree)?;
        return Ok(format!("{}\n", serde_json::to_string_pretty(&report)?));
    }
    Ok(presenter.render_resolution(navigator, resolution, with_tree)?)
}

fn listing(
    presenter: &Presenter,
    term: &str,
    resolution: &Resolution<'_>,
    records: &[&DescriptorRecord],
    json_output: bool,
) -> Result<String> {
    if json_output {
        let value = json!({
            "query": term,
            "kind": resolution.kind(),
            "message": resolution.message(),
            "records": records,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut out = String::new();
    if let Some(message) = resolution.message() {
        out.push_str(message);
        out.push_str("\n\n");
    }
    out.push_str(&presenter.render_list(records));
    Ok(out)
}

fn is_descendant(
    navigator: &TreeNavigator<'_>,
    candidate: &str,
    ancestors: &[String],
    json_output: bool,
) -> Result<String> {
    let index = navigator.index();
    let mut missing = Vec::new();
    let found = index.by_codes(&[candidate]);
    if found.is_empty() {
        missing.push(candidate.to_string());
    }

    let ancestor_records: Vec<_> = ancestors
        .iter()
        .filter_map(|code| {
            let record = index.by_codes(&[code]).into_iter().next();
            if record.is_none() {
                missing.push(code.clone());
            }
            record
        })
        .collect();

    let result = found
        .first()
        .is_some_and(|record| navigator.is_descendant_of(record, &ancestor_records));

    if json_output {
        let value = json!({
            "candidate": candidate,
            "ancestors": ancestors,
            "missing": missing,
            "result": result,
        });
        return Ok(format!("{}\n", serde_json::to_string_pretty(&value)?));
    }

    let mut out = String::new();
    for code in &missing {
        out.push_str(&format!("can't find: {code}\n"));
    }
    out.push_str(if result { "true\n" } else { "false\n" });
    Ok(out)
}
