//! 점수 집계
//!
//! 채점표 데이터 행의 마지막 열(O/X/?/-)로 점수를 계산한다.
//! `?` 행은 오답으로 세지 않고 따로 센다.

use crate::types::GradeMark;
use serde::Serialize;

/// 상세 통계에 나열할 최대 문제 수
const MAX_LISTED: usize = 5;

/// 점수 요약
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoreSummary {
    pub correct: usize,
    pub incorrect: usize,
    pub manual_count: usize,
    pub total: usize,
    pub auto_total: usize,
    pub percentage: f64,
}

fn last_mark(row: &[String]) -> Option<GradeMark> {
    row.last().and_then(|cell| GradeMark::from_cell(cell))
}

impl ScoreSummary {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut summary = ScoreSummary {
            total: rows.len(),
            ..Default::default()
        };

        for row in rows {
            match last_mark(row) {
                Some(GradeMark::Correct) => summary.correct += 1,
                Some(GradeMark::Incorrect) => summary.incorrect += 1,
                Some(GradeMark::Manual) => summary.manual_count += 1,
                Some(GradeMark::Error) | None => {}
            }
        }

        summary.auto_total = summary.correct + summary.incorrect;
        summary.percentage = if summary.auto_total > 0 {
            summary.correct as f64 / summary.auto_total as f64 * 100.0
        } else {
            0.0
        };
        summary
    }

    pub fn has_manual(&self) -> bool {
        self.manual_count > 0
    }

    /// 화면 표시용 한 줄 요약
    pub fn score_line(&self) -> String {
        if self.has_manual() {
            format!(
                "자동 채점: {}/{} | 수동 확인 필요: {}개",
                self.correct, self.auto_total, self.manual_count
            )
        } else {
            format!(
                "점수: {}/{} ({:.1}%)",
                self.correct, self.total, self.percentage
            )
        }
    }
}

/// 상세 통계 (틀린 문제 / 수동 확인 문제 목록 포함)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Statistics {
    pub summary: ScoreSummary,
    pub wrong: Vec<String>,
    pub manual: Vec<String>,
}

impl Statistics {
    pub fn from_rows(rows: &[Vec<String>]) -> Self {
        let mut wrong = Vec::new();
        let mut manual = Vec::new();

        for row in rows.iter().filter(|row| row.len() >= 4) {
            let line = format!("• {} → {} (내 답: {})", row[1], row[2], row[3]);
            match last_mark(row) {
                Some(GradeMark::Incorrect) => wrong.push(line),
                Some(GradeMark::Manual) => manual.push(line),
                _ => {}
            }
        }

        Self {
            summary: ScoreSummary::from_rows(rows),
            wrong,
            manual,
        }
    }

    pub fn render(&self) -> String {
        let s = &self.summary;
        let mut text = format!(
            "📊 시험 통계\n\n✅ 맞힌 문제: {}개\n❌ 틀린 문제: {}개\n❓ 수동 확인 필요: {}개\n📝 전체 문제: {}개\n",
            s.correct, s.incorrect, s.manual_count, s.total
        );

        if s.auto_total > 0 {
            text.push_str(&format!("📈 자동 채점 정답률: {:.1}%\n", s.percentage));
        }

        if !self.wrong.is_empty() {
            text.push_str("\n❌ 틀린 문제들:\n");
            push_listed(&mut text, &self.wrong);
        }

        if !self.manual.is_empty() {
            text.push_str("\n❓ 수동 확인이 필요한 문제들:\n");
            push_listed(&mut text, &self.manual);
            text.push_str("💡 이 문제들은 정답과 비교하여 직접 채점해주세요.\n");
        }

        if self.wrong.is_empty() && self.manual.is_empty() {
            text.push_str("\n🎉 자동으로 확인된 모든 문제를 맞혔습니다!\n");
        }

        text
    }
}

fn push_listed(text: &mut String, lines: &[String]) {
    for line in lines.iter().take(MAX_LISTED) {
        text.push_str(line);
        text.push('\n');
    }
    if lines.len() > MAX_LISTED {
        text.push_str(&format!("... 외 {}개\n", lines.len() - MAX_LISTED));
    }
}
