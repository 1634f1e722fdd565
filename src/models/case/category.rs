use super::status::CaseStatus;

/// A board of cases sharing one workflow status, backed by its own list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaseCategory(pub CaseStatus);

impl CaseCategory {
    pub fn all() -> impl Iterator<Item = CaseCategory> {
        CaseStatus::ALL.into_iter().map(CaseCategory)
    }

    /// URL slug used by this server, e.g. `/cases/pending-check`.
    pub fn slug(&self) -> &'static str {
        match self.0 {
            CaseStatus::Submitted => "submitted",
            CaseStatus::PendingCheck => "pending-check",
            CaseStatus::Accepted => "accepted",
            CaseStatus::Returned => "returned",
            CaseStatus::DecisionMade => "decision-made",
            CaseStatus::Appeal => "appeal",
            CaseStatus::Closed => "closed",
        }
    }

    pub fn from_slug(slug: &str) -> Option<CaseCategory> {
        Self::all().find(|c| c.slug() == slug)
    }

    /// Backend list endpoint, relative to the API base.
    pub fn backend_path(&self) -> &'static str {
        match self.0 {
            CaseStatus::Submitted => "cases/submitted",
            CaseStatus::PendingCheck => "cases/pending-check-full",
            CaseStatus::Accepted => "cases/accepted",
            CaseStatus::Returned => "cases/returned",
            CaseStatus::DecisionMade => "cases/decision-made",
            CaseStatus::Appeal => "cases/appeal",
            CaseStatus::Closed => "cases/closed",
        }
    }

    pub fn title(&self) -> &'static str {
        match self.0 {
            CaseStatus::Submitted => "Список дел",
            CaseStatus::PendingCheck => "Дела на проверке",
            CaseStatus::Accepted => "Принятые дела",
            CaseStatus::Returned => "Возвращенные дела",
            CaseStatus::DecisionMade => "Дела с принятым решением",
            CaseStatus::Appeal => "Дела на апелляции",
            CaseStatus::Closed => "Закрытые дела",
        }
    }

    pub fn empty_message(&self) -> &'static str {
        match self.0 {
            CaseStatus::Submitted => "Дела не найдены",
            CaseStatus::PendingCheck => "Дела на проверке не найдены",
            CaseStatus::Accepted => "Принятые дела не найдены",
            CaseStatus::Returned => "Возвращенные дела не найдены",
            CaseStatus::DecisionMade => "Дела с принятым решением не найдены",
            CaseStatus::Appeal => "Дела на апелляции не найдены",
            CaseStatus::Closed => "Закрытые дела не найдены",
        }
    }

    /// Category whose board a case with this raw status appears on.
    pub fn for_status(raw: &str) -> CaseCategory {
        CaseCategory(CaseStatus::parse(raw).unwrap_or(CaseStatus::Submitted))
    }

    pub fn href(&self) -> String {
        format!("/cases/{}", self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_round_trip() {
        for category in CaseCategory::all() {
            assert_eq!(CaseCategory::from_slug(category.slug()), Some(category));
        }
        assert_eq!(CaseCategory::from_slug("pending_check"), None);
    }

    #[test]
    fn pending_check_uses_full_listing() {
        let c = CaseCategory(CaseStatus::PendingCheck);
        assert_eq!(c.backend_path(), "cases/pending-check-full");
        assert_eq!(c.href(), "/cases/pending-check");
    }

    #[test]
    fn unknown_status_lands_on_submitted_board() {
        assert_eq!(CaseCategory::for_status("weird"), CaseCategory(CaseStatus::Submitted));
        assert_eq!(CaseCategory::for_status("appeal"), CaseCategory(CaseStatus::Appeal));
    }
}
