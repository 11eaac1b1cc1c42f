use painpoint_core::{EngagementScore, ProblemRecord};

/// Community attention for one record, from its source-specific counters.
///
/// | source        | formula                                          |
/// |---------------|--------------------------------------------------|
/// | reddit        | `score + num_comments * 2`                       |
/// | stackoverflow | `score + answer_count * 3 + view_count / 100`    |
/// | github        | `comments * 2`                                   |
/// | anything else | `0`                                              |
///
/// Missing counters count as zero and a negative total is clamped to zero.
pub fn score(record: &ProblemRecord) -> EngagementScore {
    let raw = match record.source.as_str() {
        "reddit" => record
            .counter("score")
            .saturating_add(record.counter("num_comments").saturating_mul(2)),
        "stackoverflow" => record
            .counter("score")
            .saturating_add(record.counter("answer_count").saturating_mul(3))
            .saturating_add(record.counter("view_count").div_euclid(100)),
        "github" => record.counter("comments").saturating_mul(2),
        _ => 0,
    };
    raw.max(0) as EngagementScore
}
