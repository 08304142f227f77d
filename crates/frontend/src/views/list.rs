use std::fmt::Write;

use roster::{
    catalog::{CatalogQuery, SortOption},
    models::Fighter,
};

use super::{catalog_href, escape, layout, page_title};

/// Render the catalog page for an already filtered and sorted selection.
pub fn render(fighters: &[&Fighter], weight_classes: &[&str], query: &CatalogQuery) -> String {
    let mut content = String::new();

    content.push_str(
        r#"<main><div class="container">
<div class="header">
<h1>UFC<span class="accent"> FIGHTERS</span></h1>
<div class="rule"></div>
<p class="tagline">Elite Fighter Statistics &amp; Records</p>
</div>
"#,
    );

    content.push_str(r#"<div class="controls">"#);
    render_weight_classes(&mut content, weight_classes, query);
    render_sort_selector(&mut content, query);
    content.push_str("</div>\n");

    let _ = writeln!(
        content,
        r#"<p class="count">Showing <strong>{}</strong> {}</p>"#,
        fighters.len(),
        if fighters.len() == 1 { "fighter" } else { "fighters" }
    );

    content.push_str(r#"<div class="grid">"#);
    for fighter in fighters {
        render_card(&mut content, fighter);
    }
    content.push_str("</div>\n</div></main>");

    layout(&page_title(None), &content)
}

fn render_weight_classes(out: &mut String, weight_classes: &[&str], query: &CatalogQuery) {
    out.push_str(r#"<div><span class="control-label">WEIGHT CLASS</span><div class="chips">"#);
    for class in weight_classes {
        let active = if *class == query.weight_class { " active" } else { "" };
        let _ = write!(
            out,
            r#"<a class="chip{}" href="{}">{}</a>"#,
            active,
            escape(&catalog_href(class, query.sort_by)),
            escape(class)
        );
    }
    out.push_str("</div></div>");
}

fn render_sort_selector(out: &mut String, query: &CatalogQuery) {
    let _ = write!(
        out,
        r#"<form method="get" action="/"><label class="control-label" for="sortBy">SORT BY</label><input type="hidden" name="weightClass" value="{}"><select id="sortBy" name="sortBy" onchange="this.form.submit()">"#,
        escape(&query.weight_class)
    );
    for option in SortOption::ALL {
        let selected = if option == query.sort_by { " selected" } else { "" };
        let _ = write!(
            out,
            r#"<option value="{}"{}>{}</option>"#,
            option.as_param(),
            selected,
            option.label()
        );
    }
    out.push_str("</select><noscript><button type=\"submit\">Apply</button></noscript></form>");
}

fn render_card(out: &mut String, fighter: &Fighter) {
    let name = escape(&fighter.name);
    let _ = write!(
        out,
        r#"<a class="card" href="/fighters/{id}">
<div class="card-image">
<img src="{image}" alt="{name}" loading="lazy">
<div class="badge-form {tier}"><div class="value">{rating}</div><div class="label">FORM</div></div>
<div class="badge-class">{weight_class}</div>
</div>
<div class="card-body">
<h2>{name}</h2>
<p class="nickname">&quot;{nickname}&quot;</p>
<div class="row"><span class="key">Record</span><span class="record"><span class="wins">{wins}</span>-<span class="losses">{losses}</span>-<span class="draws">{draws}</span></span></div>
<div class="row"><span class="key">Nationality</span><span>{nationality}</span></div>
<div class="cta">VIEW FULL STATS &rarr;</div>
</div>
</a>
"#,
        id = fighter.id,
        image = escape(&fighter.image),
        name = name,
        tier = fighter.form_tier().as_class(),
        rating = fighter.current_form_rating,
        weight_class = escape(&fighter.weight_class),
        nickname = escape(&fighter.nickname),
        wins = fighter.record.wins,
        losses = fighter.record.losses,
        draws = fighter.record.draws,
        nationality = escape(&fighter.nationality),
    );
}
