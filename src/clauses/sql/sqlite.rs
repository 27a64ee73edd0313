use super::super::traits::ClauseGenerator;

pub struct SqliteGenerator;

impl ClauseGenerator for SqliteGenerator {
    fn random_function(&self) -> &'static str {
        "RANDOM()"
    }
}
