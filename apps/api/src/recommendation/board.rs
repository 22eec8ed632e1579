//! Results board — per-session view state for recommendations.
//!
//! `Idle → Loading → Ready | Failed`, plus a single in-flight marker gating
//! detailed-roadmap requests. Network calls happen between a `begin_*` and
//! its `finish_*`; the board itself is never held across an await.
//!
//! Every `begin_*` hands out a ticket stamped with the board's epoch. `reset`
//! bumps the epoch, so a reply that arrives after a restart is dropped.

use thiserror::Error;

use crate::recommendation::models::{Career, DetailedRoadmap, RecommendedCareer};

#[derive(Debug, Error, PartialEq)]
pub enum BoardError {
    #[error("Recommendations are already being generated")]
    AlreadyLoading,

    #[error("Recommendations are not available yet")]
    NotReady,

    #[error("No career at position {0}")]
    CareerOutOfRange(usize),

    #[error("Career {0} already has a detailed roadmap")]
    AlreadyDetailed(usize),

    #[error("A detailed roadmap for career {in_flight} is still being generated")]
    DetailBusy { in_flight: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub enum ResultsState {
    Idle,
    Loading,
    Ready(Vec<RecommendedCareer>),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailTicket {
    epoch: u64,
    pub index: usize,
    /// Snapshot of the career the request is built from.
    pub career: Career,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStart {
    Started(LoadTicket),
    AlreadyReady,
}

#[derive(Debug)]
pub struct ResultsBoard {
    state: ResultsState,
    detail_in_flight: Option<usize>,
    epoch: u64,
}

impl Default for ResultsBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultsBoard {
    pub fn new() -> Self {
        Self {
            state: ResultsState::Idle,
            detail_in_flight: None,
            epoch: 0,
        }
    }

    pub fn state(&self) -> &ResultsState {
        &self.state
    }

    pub fn detail_in_flight(&self) -> Option<usize> {
        self.detail_in_flight
    }

    pub fn careers(&self) -> &[RecommendedCareer] {
        match &self.state {
            ResultsState::Ready(careers) => careers,
            _ => &[],
        }
    }

    pub fn begin_loading(&mut self) -> Result<LoadStart, BoardError> {
        match self.state {
            ResultsState::Loading => Err(BoardError::AlreadyLoading),
            ResultsState::Ready(_) => Ok(LoadStart::AlreadyReady),
            ResultsState::Idle | ResultsState::Failed(_) => {
                self.state = ResultsState::Loading;
                Ok(LoadStart::Started(LoadTicket { epoch: self.epoch }))
            }
        }
    }

    /// Applies the outcome of a load. Returns false if the ticket is stale.
    pub fn finish_loading(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Career>, String>,
    ) -> bool {
        if ticket.epoch != self.epoch || self.state != ResultsState::Loading {
            return false;
        }
        self.state = match outcome {
            Ok(careers) => ResultsState::Ready(careers.into_iter().map(Into::into).collect()),
            Err(reason) => ResultsState::Failed(reason),
        };
        true
    }

    pub fn begin_detail(&mut self, index: usize) -> Result<DetailTicket, BoardError> {
        let careers = match &self.state {
            ResultsState::Ready(careers) => careers,
            _ => return Err(BoardError::NotReady),
        };
        if let Some(in_flight) = self.detail_in_flight {
            return Err(BoardError::DetailBusy { in_flight });
        }
        let target = careers
            .get(index)
            .ok_or(BoardError::CareerOutOfRange(index))?;
        if target.is_detailed() {
            return Err(BoardError::AlreadyDetailed(index));
        }

        let career = target.career.clone();
        self.detail_in_flight = Some(index);
        Ok(DetailTicket {
            epoch: self.epoch,
            index,
            career,
        })
    }

    /// Clears the in-flight marker and, on success, upgrades that one career.
    /// Returns whether the detailed roadmap was applied.
    pub fn finish_detail(&mut self, ticket: &DetailTicket, roadmap: Option<DetailedRoadmap>) -> bool {
        if ticket.epoch != self.epoch || self.detail_in_flight != Some(ticket.index) {
            return false;
        }
        self.detail_in_flight = None;

        let (Some(roadmap), ResultsState::Ready(careers)) = (roadmap, &mut self.state) else {
            return false;
        };
        match careers.get_mut(ticket.index) {
            Some(career) => {
                career.detailed_roadmap = Some(roadmap);
                true
            }
            None => false,
        }
    }

    /// Back to `Idle`, invalidating every outstanding ticket.
    pub fn reset(&mut self) {
        self.state = ResultsState::Idle;
        self.detail_in_flight = None;
        self.epoch += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommendation::models::{DetailedRoadmapItem, Roadmap};

    fn career(title: &str) -> Career {
        Career {
            title: title.to_string(),
            description: format!("{title} description"),
            roadmap: Roadmap {
                beginner: vec!["Start".to_string()],
                intermediate: vec!["Grow".to_string()],
                expert: vec!["Lead".to_string()],
            },
        }
    }

    fn detailed() -> DetailedRoadmap {
        let item = |step: &str| DetailedRoadmapItem {
            step: step.to_string(),
            time_estimate: "3 months".to_string(),
            resources: None,
        };
        DetailedRoadmap {
            beginner: vec![item("Start")],
            intermediate: vec![item("Grow")],
            expert: vec![item("Lead")],
        }
    }

    fn ready_board() -> ResultsBoard {
        let mut board = ResultsBoard::new();
        let LoadStart::Started(ticket) = board.begin_loading().unwrap() else {
            panic!("expected a fresh load");
        };
        assert!(board.finish_loading(ticket, Ok(vec![career("A"), career("B")])));
        board
    }

    #[test]
    fn test_load_success_preserves_order() {
        let board = ready_board();
        let titles: Vec<&str> = board
            .careers()
            .iter()
            .map(|c| c.career.title.as_str())
            .collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_second_load_while_loading_is_rejected() {
        let mut board = ResultsBoard::new();
        board.begin_loading().unwrap();
        assert_eq!(board.begin_loading(), Err(BoardError::AlreadyLoading));
    }

    #[test]
    fn test_load_when_ready_does_not_refetch() {
        let mut board = ready_board();
        assert_eq!(board.begin_loading(), Ok(LoadStart::AlreadyReady));
        assert_eq!(board.careers().len(), 2);
    }

    #[test]
    fn test_failed_load_leaves_no_careers() {
        let mut board = ResultsBoard::new();
        let LoadStart::Started(ticket) = board.begin_loading().unwrap() else {
            panic!("expected a fresh load");
        };
        board.finish_loading(ticket, Err("missing `careers` field".to_string()));
        assert!(matches!(board.state(), ResultsState::Failed(_)));
        assert!(board.careers().is_empty());
        assert_eq!(board.begin_detail(0), Err(BoardError::NotReady));
    }

    #[test]
    fn test_only_one_detail_in_flight() {
        let mut board = ready_board();
        let first = board.begin_detail(0).unwrap();
        assert_eq!(
            board.begin_detail(1),
            Err(BoardError::DetailBusy { in_flight: 0 })
        );

        assert!(board.finish_detail(&first, Some(detailed())));
        assert!(board.begin_detail(1).is_ok(), "retryable once the first completes");
    }

    #[test]
    fn test_detail_retryable_after_failure() {
        let mut board = ready_board();
        let first = board.begin_detail(0).unwrap();
        assert!(!board.finish_detail(&first, None));
        assert_eq!(board.detail_in_flight(), None);
        assert!(!board.careers()[0].is_detailed());

        let second = board.begin_detail(1).unwrap();
        assert_eq!(second.career.title, "B");
    }

    #[test]
    fn test_detail_only_touches_target_career() {
        let mut board = ready_board();
        let ticket = board.begin_detail(1).unwrap();
        board.finish_detail(&ticket, Some(detailed()));

        let careers = board.careers();
        assert!(!careers[0].is_detailed());
        assert!(careers[1].is_detailed());
        assert_eq!(careers[1].career, career("B"));
    }

    #[test]
    fn test_detailed_career_cannot_be_requested_again() {
        let mut board = ready_board();
        let ticket = board.begin_detail(0).unwrap();
        board.finish_detail(&ticket, Some(detailed()));
        assert_eq!(board.begin_detail(0), Err(BoardError::AlreadyDetailed(0)));
    }

    #[test]
    fn test_out_of_range_detail() {
        let mut board = ready_board();
        assert_eq!(board.begin_detail(7), Err(BoardError::CareerOutOfRange(7)));
        assert_eq!(board.detail_in_flight(), None);
    }

    #[test]
    fn test_reset_drops_stale_replies() {
        let mut board = ready_board();
        let ticket = board.begin_detail(0).unwrap();
        board.reset();
        assert!(!board.finish_detail(&ticket, Some(detailed())));

        let LoadStart::Started(stale) = board.begin_loading().unwrap() else {
            panic!("expected a fresh load");
        };
        board.reset();
        assert!(!board.finish_loading(stale, Ok(vec![career("C")])));
        assert_eq!(board.state(), &ResultsState::Idle);
    }
}
