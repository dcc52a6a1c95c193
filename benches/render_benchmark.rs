//! Parse, group and render throughput on a large synthetic transcript.
//!
//! Run with: cargo bench

#![allow(missing_docs)] // criterion macros generate undocumented items

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use transcript_stepper::model::group_into_turns;
use transcript_stepper::parser::parse_transcript;
use transcript_stepper::render::render_turn;
use transcript_stepper::view::SyntaxHighlighter;

const NUM_TURNS: usize = 2_000;

/// One user line followed by thinking, tool use, tool result and a markdown reply.
fn generate_transcript() -> String {
    let reply = "Here is **the plan**:\\n- step `one`\\n- step *two*\\n```bash\\nls -la\\n```";
    let mut text = String::new();
    for i in 0..NUM_TURNS {
        text.push_str(&format!(
            r#"{{"message":{{"role":"user","content":"question {i} <with markup>"}}}}"#
        ));
        text.push('\n');
        text.push_str(r#"{"type":"thinking","message":{"content":[{"thinking":"considering"}]}}"#);
        text.push('\n');
        text.push_str(&format!(
            r#"{{"type":"tool_use","message":{{"content":[{{"name":"Bash","input":{{"command":"cat file{i}.txt"}}}}]}}}}"#
        ));
        text.push('\n');
        text.push_str(r#"{"type":"tool_result","message":{"content":[{"content":"line one\nline two"}]}}"#);
        text.push('\n');
        text.push_str(&format!(
            r#"{{"message":{{"role":"assistant","content":[{{"type":"text","text":"{reply}"}}]}}}}"#
        ));
        text.push('\n');
    }
    text
}

fn bench_parse_and_group(c: &mut Criterion) {
    let transcript = generate_transcript();

    c.bench_function("parse_and_group", |b| {
        b.iter(|| {
            let parsed = parse_transcript(black_box(&transcript));
            group_into_turns(parsed.events)
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let turns = group_into_turns(parse_transcript(&generate_transcript()).events);
    let highlighter = SyntaxHighlighter::default();

    c.bench_function("render_all_turns", |b| {
        b.iter(|| {
            turns
                .iter()
                .map(|turn| render_turn(black_box(turn)).len())
                .sum::<usize>()
        })
    });

    c.bench_function("render_and_highlight_one_turn", |b| {
        b.iter(|| highlighter.highlight_all_under(&render_turn(black_box(&turns[0]))))
    });
}

criterion_group!(benches, bench_parse_and_group, bench_render);
criterion_main!(benches);
