//! Embedded default page templates, written to `pages/` on first run.
//!
//! Section headings double as scroll anchors: `## Sleep Hygiene` is reachable
//! as the navigation token `sleep-hygiene`.

const HOME: &str = r#"# Wellness Overview

One place for the daily work across seven life dimensions. Each card below
tracks a goal list; completing a goal earns XP, and the first completion per
dimension each day earns that day's medal.

Press `:` to jump anywhere by name, `?` for the key reference.
"#;

const PHYSICAL: &str = r#"# Physical Health

Daily movement, recovery and fuel. Small consistent sessions beat heroic
one-offs.

## Training

Alternate cardiovascular work and strength work across the week. Keep one
full rest day. Track sessions as goals so the streak is visible.

## Stretching

Ten minutes after training, or any evening: hips, hamstrings, thoracic
spine, shoulders. Hold each position for five slow breaths.

## Hydration

A steady intake target works better than catching up at night. The profile
weight sets a daily target of 35 ml per kilogram; the readout on this page
tracks it.
"#;

const MENTAL: &str = r#"# Mental Health

Attention and emotional regulation are trainable. The goal list here seeds a
short daily practice set.

## Practices

Mindfulness minutes, naming emotions with precision, separating what is in
your control from what is not, and planning tomorrow before closing today.
"#;

const FINANCIAL: &str = r#"# Financial Health

Know where the money goes, keep a buffer, let time do the compounding.

## Asset Horizon

Large purchases wear out on a schedule. The tracker on this page assumes a
seven-year replacement horizon per asset so the next expense is never a
surprise.
"#;

const FAMILY: &str = r#"# Family Health

Relationships run on deliberate attention. Schedule the time; protect it
from screens; say the appreciation out loud.
"#;

const PROFESSIONAL: &str = r#"# Professional Health

Deep skill practice, honest energy audits, and clean boundaries between
work and rest. Check current tasks against long-term direction weekly.
"#;

const SOCIAL: &str = r#"# Social Health

Ties weaken silently. One message, one call, one shared activity at a time
keeps the circle alive.
"#;

const SPIRITUAL: &str = r#"# Spiritual Health

Quiet practice, gratitude, intention. Whatever the tradition, the daily
mechanics are the same: sit, notice, write it down.
"#;

const PREVENTIVE: &str = r#"# Preventive Health

Screenings and routine care on a calendar, not on symptoms.

## Vaccines

The schedule below computes due dates from the recorded last dose: boosters
on a fixed cycle, annual shots by season, completed series marked done.
Entries without a fixed cycle say so; confirm those with a clinician.

## Biomarkers

Reference ranges for the routine blood panel. Record a value to see which
zone it lands in; readings older than a year are flagged stale.
"#;

const DAILY_PLAN: &str = r#"# Daily Plan

A time-blocked day from first light to lights out. Fresh dates start from
the default template; edit it into the day you actually intend to have.
"#;

const REFLECTIONS: &str = r#"# Reflections

A running journal across all dimensions. Filter by text, dimension or date
range; ask for an insights pass when a pattern feels close but out of focus.
"#;

const SLEEP: &str = r#"# Sleep Quality

Sleep is the recovery half of every other dimension. Protect the window and
the rest follows.

## Sleep Hygiene

Same wake time every day, including weekends. Bright light early, dim light
late. The bedroom stays cool, dark and quiet, and screens stay outside.

## Evening Routine

Close the day on paper: tomorrow's plan, one gratitude line. Then a fixed
wind-down sequence, in the same order every night, until it runs on its own.

## Caffeine

A ten-hour cutoff before bed. Afternoon coffee pays its debt at 3 a.m.
"#;

/// Every page template, keyed by page slug.
pub const TEMPLATES: &[(&str, &str)] = &[
    ("home", HOME),
    ("physical", PHYSICAL),
    ("mental", MENTAL),
    ("financial", FINANCIAL),
    ("family", FAMILY),
    ("professional", PROFESSIONAL),
    ("social", SOCIAL),
    ("spiritual", SPIRITUAL),
    ("preventive", PREVENTIVE),
    ("daily-plan", DAILY_PLAN),
    ("reflections", REFLECTIONS),
    ("sleep", SLEEP),
];
