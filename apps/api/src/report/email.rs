//! Email Renderer: fixed interview and rejection templates.

use crate::models::result::MatchingResult;

/// Interview invitation addressed to the candidate, quoting their score.
pub fn interview_email(result: &MatchingResult) -> String {
    let name = result.candidate.display_name();
    let score = result.score;
    format!(
        "Subject: Interview Invitation - Congratulations!

Dear {name},

Thank you for applying to our position. We were impressed with your background and experience, particularly your strengths in key areas that match our requirements.

Your application scored {score:.2}% relevance to our position, which is quite notable!

We would like to invite you for an interview to discuss your qualifications and how you can contribute to our team.

Please let us know your availability for a virtual meeting next week.

Best regards,
Recruitment Team"
    )
}

/// Rejection notice addressed to the candidate.
pub fn rejection_email(result: &MatchingResult) -> String {
    let name = result.candidate.display_name();
    format!(
        "Subject: Update on Your Application

Dear {name},

Thank you for taking the time to apply for our position and for sharing your qualifications with us.

While we were impressed with your background, we have decided to move forward with candidates whose experience more closely aligns with our current requirements.

We appreciate your interest in our company and encourage you to apply for future positions that may be a better fit.

We wish you the best in your job search.

Best regards,
Recruitment Team"
    )
}

/// Fills in both email bodies on a freshly evaluated result.
pub fn attach_emails(result: &mut MatchingResult) {
    result.interview_email = Some(interview_email(result));
    result.rejection_email = Some(rejection_email(result));
}
