use crate::domain::document::NormalizedDocument;

/// Instructions for the evaluation service.
///
/// Asks for a short rationale that also judges how clearly the resume
/// explains the tasks the candidate faced and how they were solved, then a
/// final score from 1 to 10. The answer is requested in Russian so that the
/// default [`crate::scoring::parser::DEFAULT_KEYWORDS`] table recognizes it.
pub const SYSTEM_PROMPT: &str = "\
Проскорь кандидата, насколько он подходит для данной вакансии.

Сначала напиши короткий анализ, который будет пояснять оценку.
Отдельно оцени качество заполнения резюме (понятно ли, с какими задачами сталкивался кандидат и каким образом их решал?). \
Эта оценка должна учитываться при выставлении финальной оценки - нам важно нанимать таких кандидатов, которые могут рассказать про свою работу.
Потом представь результат в виде оценки от 1 до 10.";

/// Joins both documents into the user message.
pub fn build_user_prompt(job_posting: &NormalizedDocument, resume: &NormalizedDocument) -> String {
    format!("# JOB POSTING\n{job_posting}\n\n# RESUME\n{resume}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extractors::{extract_job_posting, extract_resume};

    #[test]
    fn user_prompt_puts_posting_before_resume() {
        let job = extract_job_posting("<h1>Engineer</h1>");
        let resume = extract_resume("<h2 data-qa='bloko-header-1'>Jane</h2>");

        let prompt = build_user_prompt(&job, &resume);

        assert!(prompt.starts_with("# JOB POSTING\n# Engineer\n"));
        let resume_at = prompt.find("\n\n# RESUME\n# Jane").unwrap();
        assert!(prompt[..resume_at].ends_with("Description not found"));
    }
}
