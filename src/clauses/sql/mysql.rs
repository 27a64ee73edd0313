use super::super::traits::ClauseGenerator;

pub struct MysqlGenerator;

impl ClauseGenerator for MysqlGenerator {
    fn random_function(&self) -> &'static str {
        "RAND()"
    }
}
