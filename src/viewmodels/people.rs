use std::rc::Rc;

use yew::Reducible;

use crate::models::Person;

/// Rows of the user list page
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PeopleList {
    pub people: Vec<Person>,
    pub loading: bool,
}

pub enum PeopleAction {
    Loading,
    Loaded(Vec<Person>),
    LoadFailed,
    /// Server confirmed the delete
    Remove(i64),
}

impl Reducible for PeopleList {
    type Action = PeopleAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            PeopleAction::Loading if self.loading => self,
            PeopleAction::Loading => Rc::new(PeopleList { loading: true, ..(*self).clone() }),
            PeopleAction::Loaded(people) => Rc::new(PeopleList { people, loading: false }),
            PeopleAction::LoadFailed => Rc::new(PeopleList { loading: false, ..(*self).clone() }),
            PeopleAction::Remove(id) => {
                if !self.people.iter().any(|p| p.id == Some(id)) {
                    return self;
                }
                let people = self.people.iter().filter(|p| p.id != Some(id)).cloned().collect();
                Rc::new(PeopleList { people, loading: self.loading })
            }
        }
    }
}
