use crate::error::{VacalError, VacalResult};
use crate::modal::FormMode;
use crate::person::{DEFAULT_COLOR, DEFAULT_IMAGE_URL, Person, parse_hex_color};
use crate::store::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonForm {
    pub mode: FormMode<Person>,
    pub name: String,
    pub email: String,
    pub color: String,
    pub image_url: String,
}

impl PersonForm {
    pub fn create() -> Self {
        PersonForm {
            mode: FormMode::Create,
            name: String::new(),
            email: String::new(),
            color: DEFAULT_COLOR.to_string(),
            image_url: DEFAULT_IMAGE_URL.to_string(),
        }
    }

    pub fn edit(person: &Person) -> Self {
        PersonForm {
            mode: FormMode::Edit(person.clone()),
            name: person.name.clone(),
            email: person.email.clone(),
            color: person.color.clone(),
            image_url: person.image_url.clone(),
        }
    }

    pub fn title(&self) -> &'static str {
        if self.mode.is_edit() { "Edit Person" } else { "New Person" }
    }

    /// Name and email are required; color must be `#RRGGBB`.
    pub fn validate(&self) -> VacalResult<()> {
        if self.name.trim().is_empty() {
            return Err(VacalError::Validation("Name is required".into()));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(VacalError::Validation(format!(
                "'{}' is not a valid email address",
                self.email
            )));
        }
        if parse_hex_color(&self.color).is_none() {
            return Err(VacalError::Validation(format!(
                "'{}' is not a #RRGGBB color",
                self.color
            )));
        }
        Ok(())
    }

    fn to_action(&self) -> VacalResult<Action> {
        self.validate()?;

        let name = self.name.trim().to_string();
        let email = self.email.trim().to_string();
        let action = match &self.mode {
            FormMode::Create => Action::AddPerson(Person::new(
                name,
                email,
                self.color.clone(),
                self.image_url.clone(),
            )),
            FormMode::Edit(original) => Action::UpdatePerson(Person {
                id: original.id.clone(),
                name,
                email,
                color: self.color.clone(),
                image_url: self.image_url.clone(),
            }),
        };
        Ok(action)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PersonModal {
    form: Option<PersonForm>,
}

impl PersonModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn open_create(&mut self) {
        self.form = Some(PersonForm::create());
    }

    pub fn open_edit(&mut self, person: &Person) {
        self.form = Some(PersonForm::edit(person));
    }

    pub fn form(&self) -> Option<&PersonForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut PersonForm> {
        self.form.as_mut()
    }

    pub fn submit(&mut self) -> VacalResult<Option<Action>> {
        let Some(form) = &self.form else {
            return Ok(None);
        };
        let action = form.to_action()?;
        self.form = None;
        Ok(Some(action))
    }

    /// Deleting a person also deletes their events once dispatched.
    pub fn delete(&mut self) -> Option<Action> {
        let id = self.form.as_ref()?.mode.original()?.id.clone();
        self.form = None;
        Some(Action::DeletePerson(id))
    }

    pub fn cancel(&mut self) {
        self.form = None;
    }
}
