use super::super::traits::ClauseGenerator;

pub struct PostgresGenerator;

impl ClauseGenerator for PostgresGenerator {
    fn random_function(&self) -> &'static str {
        "RANDOM()"
    }
}
