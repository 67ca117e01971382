//! Prompt compiler.
//!
//! Deterministically renders a match record into a generation request:
//! persona, match context, task instructions with result-conditioned tone
//! guidance, and the literal output schema the validator will later
//! enforce. Pure transformation, no I/O, no failure modes.

use backpage_core::{GenerationRequest, MatchOutcome, MatchRecord, Tone};

/// Number of slides the model is asked to produce.
pub const SLIDE_COUNT: usize = 4;

/// Generation cap passed to the provider.
pub const MAX_TOKENS: u32 = 1024;

/// Standing persona brief, sent as the system prompt.
const PERSONA: &str = "You are an expert sports content writer specialising in Instagram and \
Snapchat Stories for a B2B sports media platform. Your writing is bold, \
punchy, and visual-first. You write for fans who are scrolling fast — \
every word must earn its place. You never use clichés like 'at the end \
of the day' or 'gave 110 percent'.";

/// Compile a match record into a generation request.
///
/// The same record always compiles to an identical request.
///
/// # Examples
///
/// ```
/// use backpage_core::Tone;
/// use backpage_story::compile;
/// # use backpage_core::MatchRecord;
/// # use chrono::NaiveDate;
/// # let record = MatchRecord::new(
/// #     "Los Angeles Lakers", "Boston Celtics",
/// #     "Los Angeles Lakers vs Boston Celtics",
/// #     NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
/// #     None, "basketball", "NBA", true, 124, 104, None,
/// # ).unwrap();
///
/// let request = compile(&record);
/// assert_eq!(request.tone, Tone::Celebratory);
/// assert!(request.user.contains("\"type\": \"headline\""));
/// ```
pub fn compile(record: &MatchRecord) -> GenerationRequest {
    let tone = Tone::from(*record.outcome());
    let user = format!(
        "{}\n\n{}\n\n{}",
        match_context(record),
        task(record),
        output_format(record)
    );

    GenerationRequest {
        system: PERSONA.to_string(),
        user,
        slide_count: SLIDE_COUNT,
        tone,
        max_tokens: MAX_TOKENS,
    }
}

/// The match-context section: the normalized facts, not the raw API payload.
fn match_context(record: &MatchRecord) -> String {
    let location = if *record.home() { "at home" } else { "on the road" };

    // Sport-specific detail line: goal scorers for football when the source
    // provides them, the point margin for everything else.
    let extra_detail = match record.detail() {
        Some(detail) => detail.clone(),
        None => format!("Margin of victory/defeat: {} points.", record.margin()),
    };

    format!(
        "Here is the match data you will write about:\n\
         \n\
         - Team: {team}\n\
         - Sport: {sport}\n\
         - League: {league}\n\
         - Opponent: {opponent}\n\
         - Result: {result}\n\
         - Score: {score_line}\n\
         - Date: {date}\n\
         - Venue: {venue}\n\
         - Location: {location}\n\
         {extra_detail}",
        team = record.team(),
        sport = record.sport(),
        league = record.league(),
        opponent = record.opponent(),
        result = record.outcome(),
        score_line = record.score_line(),
        date = record.date(),
        venue = record.venue().as_deref().unwrap_or("Unknown Venue"),
        location = location,
        extra_detail = extra_detail,
    )
}

/// Tone guidance per outcome.
fn tone_guidance(outcome: MatchOutcome) -> &'static str {
    match outcome {
        MatchOutcome::Win => {
            "Tone: Celebratory and bold. This is a moment to hype the fanbase. \
             Use strong, active language. Make the reader feel the win."
        }
        MatchOutcome::Loss => {
            "Tone: Honest and forward-looking. Acknowledge the result directly — \
             don't sugarcoat it — but end on a note of resilience or next-game \
             motivation. Fans respect honesty."
        }
        MatchOutcome::Draw => {
            "Tone: Measured but engaging. A draw has drama in it — find it. \
             Focus on a standout moment or stat that makes the story worth telling."
        }
    }
}

fn task(record: &MatchRecord) -> String {
    format!(
        "Your task is to generate a {count}-slide Instagram/Snapchat Story about this match.\n\
         \n\
         {tone_guidance}\n\
         \n\
         The {count} slides must be:\n\
         1. HEADLINE slide — A short punchy headline (max 5 words, ALL CAPS) and a \
         one-sentence subtext (max 15 words) that expands on it.\n\
         2. STAT slide — Focus on the final score. Include a stat_label, stat_value, \
         and one narrative sentence (max 20 words) giving context.\n\
         3. STAT slide — Pick the most compelling secondary stat or moment from the \
         data (margin, a scorer, a comeback, a shutout, etc). Same structure.\n\
         4. CTA slide — A call-to-action for the team's fanbase. The text field should \
         be an account handle style label, and subtext should be a one-line \
         follow/engage prompt with a relevant emoji.\n\
         \n\
         Important constraints:\n\
         - Headlines must feel like a back-page newspaper splash, not a press release.\n\
         - Stat values should be formatted for visual impact (e.g. \"124 - 104\", \"2 - 0\").\n\
         - Never start two slides with the same word.\n\
         - Write specifically about THIS match. Do not use generic filler content.",
        count = SLIDE_COUNT,
        tone_guidance = tone_guidance(*record.outcome()),
    )
}

/// The output-format section: the literal JSON schema the validator will
/// enforce, plus an explicit suppression of conversational preamble.
fn output_format(record: &MatchRecord) -> String {
    format!(
        "Return ONLY a valid JSON object. No explanation, no markdown, no code fences.\n\
         Start your response with {{ and end with }}.\n\
         \n\
         The JSON must follow this exact schema:\n\
         \n\
         {{\n\
         \x20 \"team\": \"{team}\",\n\
         \x20 \"match\": \"<event name>\",\n\
         \x20 \"date\": \"{date}\",\n\
         \x20 \"result\": \"{result}\",\n\
         \x20 \"slides\": [\n\
         \x20   {{\n\
         \x20     \"type\": \"headline\",\n\
         \x20     \"text\": \"<MAX 5 WORDS ALL CAPS>\",\n\
         \x20     \"subtext\": \"<max 15 words>\"\n\
         \x20   }},\n\
         \x20   {{\n\
         \x20     \"type\": \"stat\",\n\
         \x20     \"stat_label\": \"<short label e.g. FINAL SCORE>\",\n\
         \x20     \"stat_value\": \"<the value e.g. 124 - 104>\",\n\
         \x20     \"narrative\": \"<max 20 words of context>\"\n\
         \x20   }},\n\
         \x20   {{\n\
         \x20     \"type\": \"stat\",\n\
         \x20     \"stat_label\": \"<short label>\",\n\
         \x20     \"stat_value\": \"<the value>\",\n\
         \x20     \"narrative\": \"<max 20 words of context>\"\n\
         \x20   }},\n\
         \x20   {{\n\
         \x20     \"type\": \"cta\",\n\
         \x20     \"text\": \"<fanbase label>\",\n\
         \x20     \"subtext\": \"<one-line engage prompt with emoji>\"\n\
         \x20   }}\n\
         \x20 ]\n\
         }}",
        team = record.team(),
        date = record.date(),
        result = record.outcome(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(team_score: u32, opponent_score: u32) -> MatchRecord {
        MatchRecord::new(
            "Los Angeles Lakers",
            "Boston Celtics",
            "Los Angeles Lakers vs Boston Celtics",
            NaiveDate::from_ymd_opt(2026, 2, 13).unwrap(),
            Some("Crypto.com Arena".to_string()),
            "basketball",
            "NBA",
            true,
            team_score,
            opponent_score,
            None,
        )
        .unwrap()
    }

    #[test]
    fn compilation_is_deterministic() {
        let rec = record(124, 104);
        assert_eq!(compile(&rec), compile(&rec));
    }

    #[test]
    fn tone_branches_on_outcome() {
        assert_eq!(compile(&record(124, 104)).tone, Tone::Celebratory);
        assert_eq!(compile(&record(98, 110)).tone, Tone::Resilient);
        assert_eq!(compile(&record(100, 100)).tone, Tone::Measured);

        let loss = compile(&record(98, 110));
        assert!(loss.user.contains("Honest and forward-looking"));
        assert!(!loss.user.contains("hype the fanbase"));
    }

    #[test]
    fn schema_block_embedded_literally() {
        let request = compile(&record(124, 104));
        for fragment in [
            "\"type\": \"headline\"",
            "\"type\": \"stat\"",
            "\"type\": \"cta\"",
            "\"stat_label\"",
            "\"stat_value\"",
            "\"narrative\"",
            "Return ONLY a valid JSON object",
        ] {
            assert!(request.user.contains(fragment), "missing: {}", fragment);
        }
    }

    #[test]
    fn context_carries_the_facts() {
        let request = compile(&record(124, 104));
        assert!(request.user.contains("Boston Celtics"));
        assert!(request.user.contains("2026-02-13"));
        assert!(request.user.contains("Margin of victory/defeat: 20 points."));
        assert!(request.system.contains("sports content writer"));
    }

    #[test]
    fn goal_detail_line_preferred_when_present() {
        let rec = MatchRecord::new(
            "Manchester United",
            "Arsenal",
            "Manchester United vs Arsenal",
            NaiveDate::from_ymd_opt(2026, 8, 22).unwrap(),
            Some("Old Trafford".to_string()),
            "football",
            "Premier League",
            true,
            2,
            0,
            Some("Home goal details: 12' Fernandes. Away goal details: none.".to_string()),
        )
        .unwrap();

        let request = compile(&rec);
        assert!(request.user.contains("12' Fernandes"));
        assert!(!request.user.contains("Margin of victory/defeat"));
    }
}
