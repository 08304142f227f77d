use std::fmt::Write;

use chrono::NaiveDate;
use roster::models::{Fight, FightResult, Fighter};

use super::{escape, layout, page_title};

/// Render the detail page of one fighter.
pub fn render(fighter: &Fighter) -> String {
    let mut content = String::new();

    content.push_str(
        r#"<main><div class="container">
<a class="back" href="/">&larr; Back to All Fighters</a>
"#,
    );
    render_hero(&mut content, fighter);

    content.push_str(r#"<div class="columns">"#);
    render_stats(&mut content, fighter);
    render_recent_fights(&mut content, &fighter.recent_fights);
    content.push_str("</div>\n</div></main>");

    layout(&page_title(Some(&fighter.name)), &content)
}

fn render_hero(out: &mut String, fighter: &Fighter) {
    let name = escape(&fighter.name);
    let _ = write!(
        out,
        r#"<div class="panel hero">
<div class="hero-image"><img src="{image}" alt="{name}"></div>
<div>
<span class="division">{weight_class} Division</span>
<h1>{name}</h1>
<p class="nickname">&quot;{nickname}&quot;</p>
<div class="form-block {tier}"><div class="value">{rating}</div><div class="label">Current Form Rating</div></div>
<div class="facts">
<div class="fact"><div class="key">Record</div><div class="value record"><span class="wins">{wins}</span>-<span class="losses">{losses}</span>-<span class="draws">{draws}</span></div></div>
<div class="fact"><div class="key">Nationality</div><div class="value">{nationality}</div></div>
<div class="fact"><div class="key">Age</div><div class="value">{age} years</div></div>
<div class="fact"><div class="key">Height</div><div class="value">{height}</div></div>
<div class="fact"><div class="key">Reach</div><div class="value">{reach}</div></div>
<div class="fact"><div class="key">Stance</div><div class="value">{stance}</div></div>
</div>
</div>
</div>
"#,
        image = escape(&fighter.image),
        name = name,
        weight_class = escape(&fighter.weight_class),
        nickname = escape(&fighter.nickname),
        tier = fighter.form_tier().as_class(),
        rating = fighter.current_form_rating,
        wins = fighter.record.wins,
        losses = fighter.record.losses,
        draws = fighter.record.draws,
        nationality = escape(&fighter.nationality),
        age = fighter.age,
        height = escape(&fighter.height),
        reach = escape(&fighter.reach),
        stance = escape(&fighter.stance),
    );
}

fn render_stats(out: &mut String, fighter: &Fighter) {
    let stats = &fighter.stats;
    let rows = [
        ("Strikes Landed/Min", stats.strikes_landed_per_minute, false, 15.0),
        ("Striking Accuracy", stats.striking_accuracy, true, 1.0),
        ("Takedown Average", stats.takedown_average, false, 20.0),
        ("Takedown Accuracy", stats.takedown_accuracy, true, 1.0),
        ("Submission Average", stats.submission_average, false, 30.0),
    ];

    out.push_str(r#"<div class="panel"><h2 class="section-title">Fighting Stats</h2>"#);
    for (label, value, is_percentage, scale) in rows {
        let _ = write!(
            out,
            r#"<div class="stat"><div class="row"><span class="key">{}</span><strong>{}{}</strong></div><div class="bar"><div class="bar-fill" style="width: {}%"></div></div></div>"#,
            label,
            value,
            if is_percentage { "%" } else { "" },
            bar_width(value, scale)
        );
    }
    out.push_str("</div>\n");
}

fn render_recent_fights(out: &mut String, fights: &[Fight]) {
    out.push_str(r#"<div class="panel"><h2 class="section-title">Recent Fights</h2>"#);
    for fight in fights {
        let _ = write!(
            out,
            r#"<div class="fight">
<div class="fight-head"><span class="result {result_class}">{result}</span><span class="opponent">{opponent}</span></div>
<div class="fight-method">{method} &bull; Round {round}</div>
<div class="fight-foot"><span class="event">{event}</span><span class="date">{date}</span></div>
</div>
"#,
            result_class = result_class(fight.result),
            result = fight.result.label(),
            opponent = escape(&fight.opponent),
            method = escape(&fight.method),
            round = fight.round,
            event = escape(&fight.event),
            date = format_fight_date(fight.date),
        );
    }
    out.push_str("</div>\n");
}

/// Bar width in percent: the value times `scale`, capped at 100.
fn bar_width(value: f64, scale: f64) -> f64 {
    (value * scale).clamp(0.0, 100.0)
}

fn result_class(result: FightResult) -> &'static str {
    match result {
        FightResult::Win => "result-win",
        FightResult::Loss => "result-loss",
        FightResult::Draw | FightResult::NoContest => "result-other",
    }
}

/// `Jun 1, 2024` style.
fn format_fight_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}
