use crate::application::read_models::{
    DetailReport, FreeStyleView, HitListEntry, KbaView, ReportDetails, RichText,
};
use crate::rule_preview::domain::{HitPayload, KbaDocument, RuleDetail};
use crate::rule_preview::services::{FreeStyleValidation, HitProjector, JsonValidator};

/// Index meaning "no hit selected"
pub const NO_SELECTION: usize = 0;

/// Token identifying one KBA lookup; results carrying an older token are stale
pub type KbaRequestId = u64;

/// DetailView - transient state of one rule detail page
///
/// Created when the page opens for a rule id and dropped when it closes.
/// Selection uses 1-based hit indices with 0 meaning none, and an index that
/// does not point into the current hit list is always read as none.
#[derive(Debug)]
pub struct DetailView {
    rule_id: String,
    detail: Option<RuleDetail>,
    hits: Vec<HitPayload>,
    selected: usize,
    expanded: bool,
    free_style_text: String,
    free_style: FreeStyleValidation,
    kba_loading: bool,
    kba_detail: Option<KbaDocument>,
    kba_request: KbaRequestId,
}

impl DetailView {
    /// Opens the page for the rule id taken from the route
    pub fn new(rule_id: impl Into<String>) -> Self {
        Self {
            rule_id: rule_id.into(),
            detail: None,
            hits: Vec::new(),
            selected: NO_SELECTION,
            expanded: true,
            free_style_text: String::new(),
            free_style: FreeStyleValidation::Empty,
            kba_loading: true,
            kba_detail: None,
            kba_request: 0,
        }
    }

    pub fn rule_id(&self) -> &str {
        &self.rule_id
    }

    pub fn detail(&self) -> Option<&RuleDetail> {
        self.detail.as_ref()
    }

    pub fn set_detail(&mut self, detail: RuleDetail) {
        self.detail = Some(detail);
    }

    pub fn hits(&self) -> &[HitPayload] {
        &self.hits
    }

    /// Replaces the hit list; any previous selection is cleared
    pub fn set_hits(&mut self, hits: Vec<HitPayload>) {
        self.hits = hits;
        self.selected = NO_SELECTION;
    }

    /// Selects a hit by its 1-based list id.
    ///
    /// Selecting the already selected hit clears the selection. Ids outside
    /// the list clear it as well.
    pub fn select_hit(&mut self, id: usize) {
        self.selected = if id == self.selected || id > self.hits.len() {
            NO_SELECTION
        } else {
            id
        };
    }

    /// Selected index, reading out-of-range values as no selection
    pub fn selected_index(&self) -> usize {
        if self.selected <= self.hits.len() {
            self.selected
        } else {
            NO_SELECTION
        }
    }

    pub fn selected_hit(&self) -> Option<&HitPayload> {
        match self.selected_index() {
            NO_SELECTION => None,
            id => self.hits.get(id - 1),
        }
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Re-validates the free-style buffer on every change
    pub fn on_free_style_change(&mut self, input: impl Into<String>) {
        self.free_style_text = input.into();
        self.free_style = JsonValidator::validate(&self.free_style_text);
    }

    pub fn free_style(&self) -> &FreeStyleValidation {
        &self.free_style
    }

    /// External reference id the KBA lookup should use
    pub fn kba_id(&self) -> Option<String> {
        self.detail
            .as_ref()
            .and_then(|detail| detail.kba_id())
            .map(str::to_string)
    }

    /// Marks a new KBA lookup as in flight and returns its token
    pub fn begin_kba(&mut self) -> KbaRequestId {
        self.kba_request += 1;
        self.kba_loading = true;
        self.kba_detail = None;
        self.kba_request
    }

    /// Settles a KBA lookup. Results for superseded lookups are ignored.
    ///
    /// Returns whether the result was applied.
    pub fn finish_kba(&mut self, request: KbaRequestId, detail: Option<KbaDocument>) -> bool {
        if request != self.kba_request {
            tracing::debug!(
                request,
                current = self.kba_request,
                "ignoring stale KBA result"
            );
            return false;
        }
        self.kba_loading = false;
        self.kba_detail = detail;
        true
    }

    /// Clears the loading state when there is nothing to look up
    pub fn skip_kba(&mut self) {
        self.kba_request += 1;
        self.kba_loading = false;
        self.kba_detail = None;
    }

    pub fn kba_loading(&self) -> bool {
        self.kba_loading
    }

    pub fn kba_detail(&self) -> Option<&KbaDocument> {
        self.kba_detail.as_ref()
    }

    pub fn hit_entries(&self) -> Vec<HitListEntry> {
        let selected = self.selected_index();
        self.hits
            .iter()
            .enumerate()
            .map(|(index, hit)| HitListEntry {
                id: index + 1,
                name: hit.display_name(),
                source: hit.source(),
                date: hit.date(),
                preview: HitProjector::project(hit),
                selected: selected == index + 1,
            })
            .collect()
    }

    pub fn report(&self) -> DetailReport {
        let rule = self.detail.clone().unwrap_or_default();
        let details = ReportDetails::resolve(
            self.selected_hit().map(HitProjector::project),
            &self.free_style,
        );

        DetailReport {
            rule_id: self.rule_id.clone(),
            title: rule.title().to_string(),
            status_label: rule.rule.status_label(),
            severity_label: rule.severity.as_ref().map(|s| s.label()),
            reboot_required: rule.reboot_required(),
            publish_date: rule.publish_date_display(),
            detail_href: rule.detail_href(),
            description: RichText::from_field(rule.description.as_deref(), false),
            generic: RichText::from_field(rule.generic.as_deref(), true),
            expanded: self.expanded,
            details,
            resolution: rule.resolution.clone(),
            hits: self.hit_entries(),
            selected_hit: self.selected_index(),
            free_style: FreeStyleView {
                text: self.free_style_text.clone(),
                validated: self.free_style.validated(),
                helper_text: self.free_style.helper_text(),
            },
            kba: KbaView {
                loading: self.kba_loading,
                detail: self.kba_detail.clone(),
            },
            rule,
        }
    }
}
