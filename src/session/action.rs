#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Exit,
    PlayPiece,
    InsertPiece,
    Invalid(String),
}

impl Action {
    pub fn parse(line: &str) -> Action {
        match line.trim().parse::<i64>() {
            Ok(0) => Action::Exit,
            Ok(1) => Action::PlayPiece,
            Ok(2) => Action::InsertPiece,
            _ => Action::Invalid(line.trim().to_owned()),
        }
    }
}
