use super::{Club, Competition};

/// Clubs and competitions known to the portal
///
/// Both collections keep the order in which they were loaded. Lookups are exact string matches.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    clubs: Vec<Club>,
    competitions: Vec<Competition>,
}

impl Catalog {
    pub fn new(clubs: Vec<Club>, competitions: Vec<Competition>) -> Self {
        Self {
            clubs,
            competitions,
        }
    }

    pub fn clubs(&self) -> &[Club] {
        &self.clubs
    }

    pub fn competitions(&self) -> &[Competition] {
        &self.competitions
    }

    pub fn find_club_by_name(&self, name: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.name == name)
    }

    pub fn find_club_by_email(&self, email: &str) -> Option<&Club> {
        self.clubs.iter().find(|club| club.email == email)
    }

    pub fn find_competition_by_name(&self, name: &str) -> Option<&Competition> {
        self.competitions
            .iter()
            .find(|competition| competition.name == name)
    }

    /// Mutable access to a club and a competition at the same time
    ///
    /// Either side is `None` when no record matches.
    pub fn club_and_competition_mut(
        &mut self,
        club_name: &str,
        competition_name: &str,
    ) -> (Option<&mut Club>, Option<&mut Competition>) {
        let club = self.clubs.iter_mut().find(|club| club.name == club_name);
        let competition = self
            .competitions
            .iter_mut()
            .find(|competition| competition.name == competition_name);
        (club, competition)
    }
}
