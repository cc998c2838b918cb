//! Lead draft and the three-step creation wizard

use chrono::NaiveDate;
use serde_json::{json, Value};

use super::{amount_text, contact_fields_filled, optional_amount, optional_text, REQUIRED_CONTACT_FIELDS};
use crate::derive::{date_input_value, one_week_later};
use crate::editor::FormDraft;
use crate::models::Lead;

#[derive(Debug, Clone, PartialEq)]
pub struct LeadDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub source: String,
    pub property_status: String,
    pub interest: String,
    pub budget: String,
    pub notes: String,
    pub next_follow_up: String,
    pub listing_url: String,
    pub listing_type: String,
    pub listing_status: String,
    pub reminder_date: String,
    pub is_agenda: bool,
}

impl LeadDraft {
    /// Create-mode defaults; both dates a week out
    pub fn new(today: NaiveDate) -> Self {
        let week = one_week_later(today);
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            source: "direct".to_string(),
            property_status: "aranacak".to_string(),
            interest: String::new(),
            budget: String::new(),
            notes: String::new(),
            next_follow_up: week.clone(),
            listing_url: String::new(),
            listing_type: String::new(),
            listing_status: "active".to_string(),
            reminder_date: week,
            is_agenda: false,
        }
    }

    pub fn contact_filled(&self) -> bool {
        contact_fields_filled(&self.first_name, &self.last_name, &self.phone)
    }
}

impl FormDraft for LeadDraft {
    type Record = Lead;

    fn from_record(lead: &Lead) -> Self {
        let date = |v: &Option<String>| v.as_deref().map(date_input_value).unwrap_or_default();
        Self {
            first_name: lead.first_name.clone(),
            last_name: lead.last_name.clone(),
            email: lead.email.clone().unwrap_or_default(),
            phone: lead.phone.clone(),
            source: lead.source.clone(),
            property_status: lead.property_status.clone(),
            interest: lead.interest.clone().unwrap_or_default(),
            budget: amount_text(lead.budget),
            notes: lead.notes.clone().unwrap_or_default(),
            next_follow_up: date(&lead.next_follow_up),
            listing_url: lead.listing_url.clone().unwrap_or_default(),
            listing_type: lead.listing_type.clone().unwrap_or_default(),
            listing_status: lead.listing_status.clone().unwrap_or_default(),
            reminder_date: date(&lead.reminder_date),
            is_agenda: lead.is_agenda.unwrap_or(false),
        }
    }

    fn validate(&self) -> Result<(), String> {
        if self.contact_filled() {
            Ok(())
        } else {
            Err(REQUIRED_CONTACT_FIELDS.to_string())
        }
    }

    fn to_payload(&self) -> Value {
        json!({
            "firstName": self.first_name.trim(),
            "lastName": self.last_name.trim(),
            "email": optional_text(&self.email),
            "phone": self.phone.trim(),
            "source": self.source,
            "propertyStatus": self.property_status,
            "interest": optional_text(&self.interest),
            "budget": optional_amount(&self.budget),
            "notes": optional_text(&self.notes),
            "nextFollowUp": optional_text(&self.next_follow_up),
            "listingUrl": optional_text(&self.listing_url),
            "listingType": optional_text(&self.listing_type),
            "listingStatus": optional_text(&self.listing_status),
            "reminderDate": optional_text(&self.reminder_date),
            "isAgenda": self.is_agenda,
        })
    }
}

/// Wizard steps, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LeadStep {
    Contact = 1,
    Listing = 2,
    FollowUp = 3,
}

impl LeadStep {
    pub const ALL: [LeadStep; 3] = [LeadStep::Contact, LeadStep::Listing, LeadStep::FollowUp];

    pub fn number(self) -> u8 {
        self as u8
    }

    pub fn title(self) -> &'static str {
        match self {
            LeadStep::Contact => "Kişi Bilgileri",
            LeadStep::Listing => "İlan Bilgileri",
            LeadStep::FollowUp => "Takip",
        }
    }

    fn next(self) -> Option<LeadStep> {
        match self {
            LeadStep::Contact => Some(LeadStep::Listing),
            LeadStep::Listing => Some(LeadStep::FollowUp),
            LeadStep::FollowUp => None,
        }
    }

    fn prev(self) -> Option<LeadStep> {
        match self {
            LeadStep::Contact => None,
            LeadStep::Listing => Some(LeadStep::Contact),
            LeadStep::FollowUp => Some(LeadStep::Listing),
        }
    }
}

/// Step cursor over a `LeadDraft`. The draft itself lives in the editor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LeadForm {
    step: LeadStep,
}

impl Default for LeadForm {
    fn default() -> Self {
        Self { step: LeadStep::Contact }
    }
}

impl LeadForm {
    pub fn step(&self) -> LeadStep {
        self.step
    }

    pub fn is_first(&self) -> bool {
        self.step == LeadStep::Contact
    }

    pub fn is_last(&self) -> bool {
        self.step == LeadStep::FollowUp
    }

    /// Forward; leaving the contact step requires name, surname and phone
    pub fn advance(&mut self, draft: &LeadDraft) -> Result<LeadStep, &'static str> {
        if self.step == LeadStep::Contact && !draft.contact_filled() {
            return Err(REQUIRED_CONTACT_FIELDS);
        }
        if let Some(next) = self.step.next() {
            self.step = next;
        }
        Ok(self.step)
    }

    /// Back; never touches the draft. Returns false on the first step.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Submission only happens from the last step
    pub fn can_submit(&self) -> bool {
        self.is_last()
    }

    pub fn reset(&mut self) {
        self.step = LeadStep::Contact;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::FakeApi;
    use crate::api::{QueryParams, RecordApi};
    use crate::editor::{persist, EditorState};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn test_defaults_one_week_out() {
        let draft = LeadDraft::new(today());
        assert_eq!(draft.next_follow_up, "2025-03-17");
        assert_eq!(draft.reminder_date, "2025-03-17");
        assert_eq!(draft.property_status, "aranacak");
        assert_eq!(draft.listing_status, "active");
        assert_eq!(draft.source, "direct");
    }

    #[test]
    fn test_edit_coerces_datetimes() {
        let lead: Lead = serde_json::from_value(json!({
            "id": 5, "firstName": "Ayşe", "lastName": "Demir", "phone": "0532",
            "source": "website", "propertyStatus": "arandi",
            "nextFollowUp": "2025-04-01T09:30:00.000Z", "budget": 3500000
        }))
        .unwrap();
        let draft = LeadDraft::from_record(&lead);
        assert_eq!(draft.next_follow_up, "2025-04-01");
        assert_eq!(draft.reminder_date, "");
        assert_eq!(draft.budget, "3500000");
    }

    #[test]
    fn test_step_one_blocks_without_required_fields() {
        let mut form = LeadForm::default();
        let mut draft = LeadDraft::new(today());
        draft.last_name = "Demir".into();
        draft.phone = "0532".into();

        assert_eq!(form.advance(&draft), Err(REQUIRED_CONTACT_FIELDS));
        assert_eq!(form.step(), LeadStep::Contact);

        draft.first_name = "Ayşe".into();
        assert_eq!(form.advance(&draft), Ok(LeadStep::Listing));
    }

    #[test]
    fn test_back_keeps_data() {
        let mut form = LeadForm::default();
        let mut draft = LeadDraft::new(today());
        draft.first_name = "Ayşe".into();
        draft.last_name = "Demir".into();
        draft.phone = "0532".into();
        form.advance(&draft).unwrap();
        draft.interest = "Kadıköy, 3+1".into();
        form.advance(&draft).unwrap();
        assert!(form.can_submit());

        assert!(form.back());
        assert!(form.back());
        assert!(!form.back());
        assert_eq!(draft.interest, "Kadıköy, 3+1");
        assert!(!form.can_submit());
    }

    #[tokio::test]
    async fn test_wizard_sends_single_create_with_all_fields() {
        let api: FakeApi<Lead> = FakeApi::new(vec![]);
        let mut editor = EditorState::default();
        let mut form = LeadForm::default();
        editor.open_create(LeadDraft::new(today()));

        // step 1 with empty first name: blocked, nothing sent
        if let Some(d) = editor.draft_mut() {
            d.last_name = "Demir".into();
            d.phone = "0532 111 22 33".into();
        }
        assert!(form.advance(editor.draft().unwrap()).is_err());
        assert_eq!(api.requests.get(), 0);

        editor.draft_mut().unwrap().first_name = "Ayşe".into();
        form.advance(editor.draft().unwrap()).unwrap();
        editor.draft_mut().unwrap().listing_type = "sale".into();
        form.advance(editor.draft().unwrap()).unwrap();
        editor.draft_mut().unwrap().notes = "Akşam aranacak".into();
        assert!(form.can_submit());

        let request = editor.begin_submit().unwrap();
        persist(&api, &request).await.unwrap();
        editor.succeed();
        assert_eq!(api.creates.get(), 1);

        let lead = api.list(&QueryParams::new()).await.unwrap().items.remove(0);
        assert_eq!(lead.first_name, "Ayşe");
        assert_eq!(lead.listing_type.as_deref(), Some("sale"));
        assert_eq!(lead.notes.as_deref(), Some("Akşam aranacak"));
        assert_eq!(lead.next_follow_up.as_deref(), Some("2025-03-17"));
    }
}
