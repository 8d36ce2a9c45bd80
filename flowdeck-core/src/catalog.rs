//! Built-in catalog — the Zornicare user-flow documentation set.
//!
//! Five roles (Administrator, Teacher, Back Office Staff, Parent, Child
//! Profile), 22 flows, 191 steps. This is pure data; the builders below
//! keep the literals readable.

use crate::model::{Catalog, Flow, Role, Step};

fn step(stage: &str, action: &str, response: &str) -> Step {
    Step {
        stage: stage.to_string(),
        action: action.to_string(),
        response: response.to_string(),
    }
}

fn flow(id: &str, title: &str, story: &str, steps: Vec<Step>, touchpoints: &[&str]) -> Flow {
    Flow {
        id: id.to_string(),
        title: title.to_string(),
        story: story.to_string(),
        steps,
        touchpoints: touchpoints.iter().map(|t| t.to_string()).collect(),
    }
}

fn role(id: &str, name: &str, icon: &str, accent: &str, flows: Vec<Flow>) -> Role {
    Role {
        id: id.to_string(),
        name: name.to_string(),
        icon: icon.to_string(),
        accent: accent.to_string(),
        flows,
    }
}

/// The shipped catalog. Valid by construction (see the tests below).
pub fn builtin() -> Catalog {
    Catalog {
        roles: vec![
            administrator(),
            teacher(),
            back_office(),
            parent(),
            child_profile(),
        ],
    }
}

fn administrator() -> Role {
    role(
        "administrator",
        "Administrator",
        "⚙",
        "purple",
        vec![
            flow(
                "enrollment_setup",
                "Setting Up New Program Enrollment",
                "As an Administrator, I want to configure a new preschool program so that parents can apply and I can manage capacity effectively.",
                vec![
                    step("Entry", "Login to admin dashboard", "Display dashboard with program management option"),
                    step("Navigate", "Click \"Program Management\"", "Show list of existing programs + \"Add Program\" button"),
                    step("Create", "Click \"Add Program\" and fill details (name, age range, capacity, tuition, schedule)", "Validate inputs in real-time"),
                    step("Configure", "Set enrollment opening date and application requirements", "Save program configuration"),
                    step("Review", "Preview public-facing registration form", "Display form as parents would see it"),
                    step("Publish", "Activate program for enrollment", "Generate program URL, send confirmation, update enrollment dashboard"),
                    step("Exit", "Return to dashboard", "Show new program in active programs list"),
                ],
                &["Admin Dashboard", "Program Management Module", "Registration Form Builder", "Enrollment Dashboard"],
            ),
            flow(
                "manage_applications",
                "Processing Enrollment Applications",
                "As an Administrator, I want to review and process applications efficiently so that families receive timely responses and we maintain optimal capacity.",
                vec![
                    step("Entry", "Receive notification of new application", "Display notification badge on applications menu"),
                    step("Review", "Open applications dashboard", "Show all applications filtered by status (Pending, Accepted, Waitlisted, Rejected)"),
                    step("Evaluate", "Click on pending application to view details", "Display child info, parent info, program selection, submitted documents"),
                    step("Check", "Verify capacity in selected program", "Show current enrollment count vs capacity"),
                    step("Decide", "Update status to Accepted/Waitlisted/Rejected with optional note", "Validate decision and prepare notification"),
                    step("Notify", "Click \"Send Decision\"", "Auto-generate email to parent, update dashboard, trigger next steps (invoice for accepted)"),
                    step("Exit", "Return to applications list", "Update application count, show next pending application"),
                ],
                &["Notification System", "Applications Dashboard", "Child Profile", "Email System", "Enrollment Dashboard"],
            ),
            flow(
                "user_management",
                "Onboarding New Teacher",
                "As an Administrator, I want to create teacher accounts with appropriate permissions so that new staff can access classroom tools immediately.",
                vec![
                    step("Entry", "Navigate to User Management", "Display all users by role (Admin, Teacher, Back Office, Parent)"),
                    step("Create", "Click \"Add User\" and select \"Teacher\" role", "Show teacher-specific registration form"),
                    step("Input", "Enter teacher name, email, phone, assigned classroom", "Validate email uniqueness, check classroom capacity"),
                    step("Configure", "Review auto-assigned permissions (attendance, messaging, milestone tracking)", "Display permission summary"),
                    step("Send", "Click \"Create Account\"", "Generate account, send welcome email with login credentials"),
                    step("Verify", "Confirm teacher received email", "Show account status as \"Pending Activation\" until first login"),
                    step("Exit", "Return to user list", "Add new teacher to active staff directory"),
                ],
                &["User Management Module", "Email System", "Permission Framework", "Staff Directory"],
            ),
            flow(
                "financial_oversight",
                "Monthly Financial Review",
                "As an Administrator, I want to review financial performance across programs so that I can identify revenue trends and address outstanding payments.",
                vec![
                    step("Entry", "Navigate to Financial Reports", "Display financial dashboard with key metrics"),
                    step("Overview", "View monthly revenue summary", "Show total revenue, paid vs pending, overdue invoices by program"),
                    step("Filter", "Select specific program or date range", "Update charts and tables with filtered data"),
                    step("Analyze", "Review payment trends and identify late payers", "Highlight accounts with overdue balances"),
                    step("Export", "Click \"Export Report\" for accounting", "Generate PDF/Excel with detailed transaction history"),
                    step("Action", "Flag accounts for follow-up", "Create task for back-office staff to contact parents"),
                    step("Exit", "Save report and return to dashboard", "Archive report with timestamp"),
                ],
                &["Financial Dashboard", "Reports Module", "Invoice System", "Task Management"],
            ),
        ],
    )
}

fn teacher() -> Role {
    role(
        "teacher",
        "Teacher",
        "✎",
        "blue",
        vec![
            flow(
                "daily_attendance",
                "Morning Attendance & Check-In",
                "As a Teacher, I want to quickly verify attendance as children arrive so that I have accurate records and can identify absences early.",
                vec![
                    step("Entry", "Open attendance module on mobile/tablet", "Display classroom roster with today's status"),
                    step("Check-In", "Parent checks in child via app OR teacher manually marks present", "Update status to \"Present\" with timestamp"),
                    step("Verify", "Confirm child details if parent-initiated check-in", "Show notification requiring teacher verification"),
                    step("Note", "Add notes if child seems unwell or parent mentions something", "Attach note to child's daily record"),
                    step("Monitor", "View real-time attendance count", "Display present/absent/late counts for the classroom"),
                    step("Alert", "System flags absent children without notification", "Send automated absence notification to parents"),
                    step("Exit", "Close attendance, begin day's activities", "Lock attendance after grace period, generate attendance report"),
                ],
                &["Mobile App", "Attendance Module", "Parent App", "Notification System", "Daily Reports"],
            ),
            flow(
                "milestone_tracking",
                "Recording Developmental Milestone",
                "As a Teacher, I want to log milestones I observe during activities so that parents stay informed and we maintain accurate developmental records.",
                vec![
                    step("Entry", "Observe child achieving milestone (e.g., stacking blocks independently)", "N/A - organic observation"),
                    step("Navigate", "Open child's profile and select \"Milestones\"", "Display CDC milestone categories by age group"),
                    step("Select", "Choose relevant milestone (e.g., Fine Motor Skills)", "Show specific milestones under category"),
                    step("Record", "Mark milestone as achieved, add observation note", "Timestamp entry, link to current activity if applicable"),
                    step("Attach", "Upload photo or video of achievement (optional)", "Process and store media securely"),
                    step("Review", "View milestone progress visualization", "Display child's progress vs CDC expectations and peer benchmarks"),
                    step("Share", "Click \"Share with Parent\"", "Send notification to parent with milestone details and media"),
                    step("Exit", "Return to classroom view", "Update child's developmental dashboard, trigger AI analysis if pattern detected"),
                ],
                &["Child Profile", "Milestone Module", "CDC Framework", "Media Storage", "Parent Notification", "AI Analysis Engine"],
            ),
            flow(
                "daily_summary",
                "End-of-Day Report Generation",
                "As a Teacher, I want to quickly generate and send daily summaries to parents so that they stay informed without me spending hours on reports.",
                vec![
                    step("Entry", "Navigate to Daily Summary at end of day", "Display AI-generated draft summary for each child"),
                    step("Review", "Read AI-compiled summary (meals, naps, activities, mood)", "Present summary with timestamps and recorded data"),
                    step("Edit", "Add personal observations or adjust AI-generated text", "Update summary in real-time"),
                    step("Attach", "Add photos from the day's activities", "Link photos to specific activities mentioned in summary"),
                    step("Preview", "View parent-facing version", "Display formatted report as parents will see it"),
                    step("Send", "Click \"Send to Parents\" for all children or individually", "Deliver reports via app notification and email"),
                    step("Confirm", "Verify delivery status", "Show \"Sent\" status with timestamp for each parent"),
                    step("Exit", "Log out or prepare for next day", "Archive reports, reset daily logs for tomorrow"),
                ],
                &["Daily Summary Module", "AI Summary Engine", "Photo Gallery", "Parent Portal", "Email System", "Notification System"],
            ),
            flow(
                "incident_reporting",
                "Logging and Reporting Incident",
                "As a Teacher, I want to immediately report incidents so that parents are informed and we maintain proper documentation.",
                vec![
                    step("Incident", "Child falls and gets minor scrape", "N/A - real-world event"),
                    step("Entry", "Open incident reporting on mobile", "Display quick incident report form"),
                    step("Classify", "Select incident type (injury, behavioral, medical)", "Show relevant fields based on type"),
                    step("Detail", "Describe what happened, where, when, who was involved", "Timestamp entry, associate with child profile"),
                    step("Document", "Take photo of injury/scene (if applicable)", "Upload and attach to incident report"),
                    step("Action", "Note first aid provided or actions taken", "Record response details"),
                    step("Notify", "Click \"Notify Parent Immediately\"", "Send instant notification to parent with incident details"),
                    step("Follow-Up", "Add follow-up notes later in day", "Update incident report with additional observations"),
                    step("Exit", "Submit final report", "Archive in child's safety log, flag for admin review if serious"),
                ],
                &["Mobile App", "Incident Module", "Child Profile", "Photo Upload", "Parent Notification", "Admin Dashboard"],
            ),
            flow(
                "parent_messaging",
                "Responding to Parent Question",
                "As a Teacher, I want to communicate with parents through a secure channel so that conversations stay organized and professional.",
                vec![
                    step("Entry", "Receive notification of parent message", "Display unread message badge in messaging module"),
                    step("Read", "Open message from parent (e.g., asking about child's nap schedule)", "Show message thread with child context"),
                    step("Context", "View child's recent nap data", "Display quick view of relevant logs (nap times, duration)"),
                    step("Respond", "Type reply with details and reassurance", "Support text formatting, emoji if appropriate"),
                    step("Attach", "Optionally attach photo of child napping peacefully", "Upload and preview attachment"),
                    step("Send", "Click \"Send\"", "Deliver message, notify parent via push notification"),
                    step("Track", "See \"Read\" receipt when parent opens message", "Update message status"),
                    step("Exit", "Return to classroom view", "Archive conversation in message history"),
                ],
                &["Messaging System", "Notification System", "Child Profile", "Activity Logs", "Parent App"],
            ),
        ],
    )
}

fn back_office() -> Role {
    role(
        "backoffice",
        "Back Office Staff",
        "$",
        "green",
        vec![
            flow(
                "invoice_creation",
                "Generating Monthly Invoices",
                "As Back Office Staff, I want to create and send invoices efficiently so that parents receive timely billing and we maintain cash flow.",
                vec![
                    step("Entry", "Navigate to Billing Module", "Display invoice management dashboard"),
                    step("Generate", "Select \"Generate Monthly Invoices\"", "Show list of enrolled children by program"),
                    step("Review", "Verify tuition amounts and any adjustments", "Display default tuition + any credits/fees per child"),
                    step("Customize", "Add late fees, sibling discounts, or special charges", "Update invoice amounts in real-time"),
                    step("Preview", "Review sample invoice", "Show parent-facing invoice format with breakdown"),
                    step("Batch", "Click \"Generate All Invoices\"", "Create invoices for all enrolled children, set status to \"Pending\""),
                    step("Notify", "Click \"Send to Parents\"", "Email invoices with payment instructions, send app notifications"),
                    step("Monitor", "Track invoice status on dashboard", "Display Paid/Pending/Overdue counts"),
                    step("Exit", "Set reminders for follow-up on overdue accounts", "Schedule automated reminders"),
                ],
                &["Billing Module", "Invoice Generator", "Email System", "Parent Portal", "Payment Dashboard"],
            ),
            flow(
                "payment_verification",
                "Verifying Manual Payment",
                "As Back Office Staff, I want to verify and record payments made outside the platform so that financial records stay accurate.",
                vec![
                    step("Entry", "Receive notification that parent uploaded payment proof", "Display notification with pending verification badge"),
                    step("Navigate", "Open invoice marked \"Proof Uploaded\"", "Show invoice details with uploaded payment screenshot/file"),
                    step("Review", "Examine payment proof (bank transfer, receipt)", "Display uploaded file in viewer"),
                    step("Verify", "Cross-check amount, date, and transaction ID against bank records", "Provide fields to enter verification notes"),
                    step("Match", "Confirm payment matches invoice amount", "Highlight any discrepancies"),
                    step("Mark", "Update invoice status to \"Paid\" with payment date", "Lock invoice, timestamp payment"),
                    step("Notify", "System sends confirmation to parent", "Auto-generate payment confirmation email with receipt"),
                    step("Record", "Payment reflected in financial dashboard", "Update revenue metrics, clear overdue status"),
                    step("Exit", "Return to pending payments list", "Remove from verification queue"),
                ],
                &["Invoice Module", "Payment Verification Queue", "File Viewer", "Financial Dashboard", "Email System"],
            ),
            flow(
                "enrollment_record_management",
                "Updating Child Enrollment Status",
                "As Back Office Staff, I want to update enrollment records when children start or leave so that billing and classroom capacity stay accurate.",
                vec![
                    step("Entry", "Navigate to Enrollment Records", "Display all enrolled children by status (Active, Pending Start, Withdrawn)"),
                    step("Select", "Search for child whose status needs updating", "Show child profile with current enrollment details"),
                    step("Update", "Change status (e.g., from Pending to Active on start date)", "Validate date, check classroom capacity"),
                    step("Adjust", "Set start/end date and prorated billing if mid-month", "Calculate prorated amount automatically"),
                    step("Notify", "System alerts relevant parties (teacher, admin, parent)", "Send multi-channel notifications"),
                    step("Billing", "System adjusts future invoice generation", "Add/remove child from billing schedule"),
                    step("Capacity", "Classroom capacity updated in real-time", "Update program enrollment dashboard"),
                    step("Exit", "Confirm changes saved", "Show updated status, archive audit log"),
                ],
                &["Enrollment Module", "Child Profile", "Billing System", "Notification System", "Capacity Management"],
            ),
            flow(
                "financial_reporting",
                "Generating Financial Report for Admin",
                "As Back Office Staff, I want to create comprehensive financial reports so that administrators can make informed business decisions.",
                vec![
                    step("Entry", "Navigate to Financial Reports", "Display report templates and date range selector"),
                    step("Configure", "Select report type (Monthly Revenue, Outstanding Balances, Program Performance)", "Show relevant filter options"),
                    step("Filter", "Set date range and program filters", "Preview data summary"),
                    step("Generate", "Click \"Generate Report\"", "Compile data from invoices, payments, enrollment records"),
                    step("Review", "Examine charts and tables", "Display revenue trends, payment status breakdown, overdue accounts"),
                    step("Analyze", "Identify patterns (e.g., programs with high late payments)", "Highlight insights with AI-suggested notes"),
                    step("Export", "Choose format (PDF, Excel, CSV)", "Generate downloadable file"),
                    step("Share", "Email report to administrator or save to shared drive", "Send via email with access link"),
                    step("Exit", "Archive report for future reference", "Save report with timestamp in report library"),
                ],
                &["Financial Reports Module", "Data Analytics", "Export System", "Email System", "Report Archive"],
            ),
        ],
    )
}

fn parent() -> Role {
    role(
        "parent",
        "Parent",
        "♥",
        "pink",
        vec![
            flow(
                "application_submission",
                "Applying for Childcare Program",
                "As a Parent, I want to apply for my child's enrollment online so that I can complete the process conveniently without visiting in person.",
                vec![
                    step("Entry", "Receive enrollment link or visit center website", "Display available programs with details"),
                    step("Browse", "Review program options (age groups, schedules, tuition)", "Show program cards with key information"),
                    step("Select", "Choose desired program", "Open online registration form"),
                    step("Guardian Info", "Fill in parent/guardian details (name, email, phone, address)", "Validate email and phone format"),
                    step("Child Info", "Enter child details (name, DOB, gender, health info)", "Calculate appropriate age group automatically"),
                    step("Upload", "Upload required documents (immunization records, ID)", "Accept PDF/image files, validate size"),
                    step("Emergency", "Add emergency contacts", "Require at least one backup contact"),
                    step("Review", "Preview submitted information", "Display summary with edit option"),
                    step("Submit", "Click \"Submit Application\"", "Generate application ID, send confirmation email"),
                    step("Wait", "Receive notification of application review timeline", "Set status to \"Pending\", notify admin"),
                    step("Exit", "Create account to track application status", "Generate parent portal access"),
                ],
                &["Public Website", "Registration Form", "Document Upload", "Email System", "Parent Portal"],
            ),
            flow(
                "daily_monitoring",
                "Checking Child's Daily Updates",
                "As a Parent, I want to view my child's daily activities so that I feel connected and informed throughout the day.",
                vec![
                    step("Entry", "Open Zornicare mobile app during lunch break", "Display parent dashboard with today's updates"),
                    step("Overview", "See quick summary (check-in time, meals, nap status)", "Show real-time status cards"),
                    step("Activities", "Tap \"Today's Activities\" to see details", "Display timeline of recorded activities with timestamps"),
                    step("Photos", "View photos uploaded by teacher", "Show gallery of today's moments"),
                    step("Milestones", "Notice notification about new milestone achieved", "Display milestone card with teacher's note and photo"),
                    step("Respond", "React with heart or comment to teacher", "Send notification to teacher, record engagement"),
                    step("Health", "Check if any incidents or health notes", "Display any flagged items prominently"),
                    step("Exit", "Feel reassured and close app", "Track engagement for analytics"),
                ],
                &["Mobile App", "Parent Dashboard", "Activity Feed", "Photo Gallery", "Milestone Module", "Messaging System"],
            ),
            flow(
                "payment_submission",
                "Paying Monthly Invoice",
                "As a Parent, I want to easily view and pay my invoice so that I can stay current on payments without hassle.",
                vec![
                    step("Entry", "Receive notification that new invoice is available", "Send push notification + email with invoice amount"),
                    step("Navigate", "Open app and tap \"View Invoice\"", "Display invoice details (tuition, fees, due date)"),
                    step("Review", "Check invoice breakdown and due date", "Show itemized charges clearly"),
                    step("Payment Method", "Choose payment option (bank transfer since no integrated payment yet)", "Display payment instructions and bank details"),
                    step("Pay", "Make payment through bank app/online banking", "N/A - external action"),
                    step("Upload", "Return to app and tap \"Upload Payment Proof\"", "Open file picker for screenshot/receipt"),
                    step("Submit", "Upload screenshot and click \"Submit for Verification\"", "Send to back-office queue, update status to \"Pending Verification\""),
                    step("Wait", "Receive notification when payment is verified", "Back office verifies, system sends confirmation"),
                    step("Confirm", "View updated invoice status as \"Paid\"", "Display payment confirmation with receipt"),
                    step("Exit", "Download receipt for records", "Generate PDF receipt"),
                ],
                &["Mobile App", "Billing Dashboard", "Email System", "File Upload", "Back Office Queue", "Receipt Generator"],
            ),
            flow(
                "milestone_review",
                "Reviewing Child's Developmental Progress",
                "As a Parent, I want to understand my child's developmental progress so that I can support their growth at home.",
                vec![
                    step("Entry", "Navigate to \"Milestones\" tab in app", "Display milestone dashboard for child"),
                    step("Overview", "View visual progress chart", "Show achieved vs expected milestones by category (Motor, Cognitive, Social, Language)"),
                    step("Compare", "See comparison with CDC standards for age", "Display age-appropriate benchmarks with child's position"),
                    step("Detail", "Tap on specific category to see individual milestones", "Show list of milestones with achievement dates and teacher notes"),
                    step("Media", "View photos/videos of milestone achievements", "Display media attached by teacher"),
                    step("Insights", "Read AI-generated developmental insights", "Show areas of strength and suggested focus areas"),
                    step("Activities", "Tap \"Suggested Activities\" for home practice", "Display age-appropriate activities to support development"),
                    step("Progress", "View historical progress over months", "Show timeline visualization of growth"),
                    step("Exit", "Feel informed and empowered", "Track engagement, update parent analytics"),
                ],
                &["Mobile App", "Milestone Dashboard", "CDC Framework", "AI Insights Engine", "Activity Suggestions", "Media Gallery"],
            ),
            flow(
                "teacher_communication",
                "Asking Teacher a Question",
                "As a Parent, I want to message my child's teacher directly so that I can get quick answers without phone calls during work.",
                vec![
                    step("Entry", "Notice child was fussy at pickup, want to understand why", "N/A - real-world trigger"),
                    step("Navigate", "Open app and tap \"Messages\"", "Display message threads with teachers"),
                    step("Compose", "Tap teacher name and type question about mood/nap", "Show message composer with child context"),
                    step("Send", "Click \"Send\"", "Deliver message, notify teacher via push notification"),
                    step("Wait", "Continue with evening activities", "Teacher receives and responds when able"),
                    step("Notify", "Receive notification of teacher reply", "Push notification with message preview"),
                    step("Read", "Open message to see teacher explanation", "Display full response with any attached context (e.g., \"had short nap today\")"),
                    step("Respond", "Thank teacher and ask follow-up if needed", "Continue threaded conversation"),
                    step("Exit", "Feel reassured and informed", "Archive conversation in message history"),
                ],
                &["Mobile App", "Messaging System", "Notification System", "Teacher App", "Child Context Panel"],
            ),
        ],
    )
}

fn child_profile() -> Role {
    role(
        "child",
        "Child Profile",
        "☺",
        "yellow",
        vec![
            flow(
                "profile_creation",
                "Creating Child Profile",
                "As the System, I need to create and maintain a comprehensive child profile that serves as the central hub for all child-related data.",
                vec![
                    step("Trigger", "Parent submits enrollment application OR Admin manually creates profile", "Initiate profile creation workflow"),
                    step("Basic Info", "Capture name, DOB, gender, photo", "Create unique child ID, validate age for program eligibility"),
                    step("Guardian Link", "Associate with parent/guardian account(s)", "Create bidirectional relationship for access control"),
                    step("Health Data", "Store immunization records, allergies, medications, medical conditions", "Flag critical health information for teacher access"),
                    step("Emergency", "Link emergency contacts with priority order", "Ensure quick access for staff"),
                    step("Program", "Assign to program and classroom", "Update capacity, notify teacher"),
                    step("Milestones", "Initialize CDC milestone tracking based on age", "Generate age-appropriate milestone checklist"),
                    step("Permissions", "Configure what teachers and parents can view/edit", "Apply role-based access control"),
                    step("Activate", "Set profile status to Active", "Make profile accessible to authorized users"),
                ],
                &["Enrollment System", "Child Profile Module", "Health Records", "Guardian Management", "Milestone Framework"],
            ),
            flow(
                "daily_data_aggregation",
                "Daily Data Collection & Summary",
                "As the System, I need to continuously collect and aggregate data throughout the day to generate meaningful insights for parents and teachers.",
                vec![
                    step("Check-In", "Record arrival time and check-in method", "Update attendance, trigger daily log initialization"),
                    step("Activities", "Teachers log activities throughout day (circle time, outdoor play, art)", "Timestamp each activity, link to child profile"),
                    step("Meals", "Record meal times, food consumed, appetite notes", "Store nutritional data, flag appetite changes"),
                    step("Naps", "Log nap start/end times, sleep quality", "Calculate total sleep duration, identify patterns"),
                    step("Milestones", "Capture milestone achievements as they occur", "Link to CDC framework, trigger AI analysis"),
                    step("Mood", "Teachers note mood/behavior observations", "Tag emotional states, detect anomalies"),
                    step("Incidents", "Record any health/safety incidents", "Flag for immediate parent notification"),
                    step("Media", "Collect photos/videos from activities", "Associate media with activities and time"),
                    step("AI Processing", "At end of day, AI compiles all data", "Generate draft daily summary with natural language"),
                    step("Teacher Review", "Teacher reviews and approves AI summary", "Allow edits, add personal observations"),
                    step("Delivery", "Send summary to parent via app + email", "Deliver formatted report with all media and insights"),
                    step("Check-Out", "Record departure time", "Complete daily cycle, archive day's data"),
                ],
                &["Attendance System", "Activity Logs", "Meal Tracking", "Sleep Tracking", "Milestone Module", "Incident Reports", "Media Storage", "AI Summary Engine", "Parent Portal"],
            ),
            flow(
                "developmental_tracking",
                "Longitudinal Developmental Tracking",
                "As the System, I need to continuously analyze developmental data over time to identify trends and provide actionable insights.",
                vec![
                    step("Data Collection", "Aggregate milestone achievements over weeks/months", "Build developmental timeline per child"),
                    step("CDC Comparison", "Compare progress against CDC standards for age", "Calculate developmental quotient by category"),
                    step("Peer Benchmarking", "Anonymously compare with age peers in center", "Generate percentile rankings"),
                    step("Pattern Detection", "AI identifies trends (acceleration, delays, strengths)", "Flag areas needing attention or celebration"),
                    step("Gap Analysis", "Detect missing milestones for age group", "Alert teachers to potential focus areas"),
                    step("Activity Linking", "Correlate activities with milestone achievements", "Identify which activities drive progress"),
                    step("Recommendations", "AI suggests targeted activities for development", "Generate personalized activity plans"),
                    step("Reporting", "Compile into monthly/quarterly progress reports", "Create parent-friendly visualizations"),
                    step("Teacher Insights", "Provide teachers with class-level developmental analytics", "Show distribution of progress across students"),
                    step("Alerting", "Flag significant delays for admin/teacher review", "Trigger intervention workflow if needed"),
                ],
                &["Milestone Database", "CDC Framework", "AI Analytics Engine", "Progress Reports", "Teacher Dashboard", "Parent Portal"],
            ),
            flow(
                "health_safety_monitoring",
                "Health & Safety Record Maintenance",
                "As the System, I need to maintain accurate health records and surface critical information to protect child wellbeing.",
                vec![
                    step("Initialization", "Store initial health data from enrollment", "Create health profile with allergies, conditions, immunizations"),
                    step("Visibility", "Make critical health info visible to teachers", "Display allergy alerts on child card, classroom roster"),
                    step("Updates", "Parent or admin updates health records", "Version control changes, notify relevant staff"),
                    step("Immunization Tracking", "Monitor immunization schedules and expiration dates", "Alert parents and admin when updates needed"),
                    step("Incident Logging", "Record injuries, illnesses, behavioral incidents", "Timestamp and link to child profile"),
                    step("Medication", "Track medication administration if applicable", "Log time, dosage, administrator"),
                    step("Pattern Analysis", "AI detects health patterns (frequent stomach issues, recurring injuries)", "Alert teachers and suggest parent consultation"),
                    step("Emergency Access", "Provide quick access to emergency contacts and medical info", "One-tap access for staff during crises"),
                    step("Compliance", "Ensure records meet regulatory requirements", "Flag missing or expired documentation"),
                    step("Privacy", "Restrict health data access by role", "Enforce HIPAA-like protections"),
                ],
                &["Health Records Module", "Immunization Tracker", "Incident Reports", "Emergency Contacts", "Teacher Dashboard", "Compliance System"],
            ),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::Summary;

    #[test]
    fn shipped_counts() {
        let catalog = builtin();
        let summary = Summary::of(&catalog);
        assert_eq!(summary.roles, 5);
        assert_eq!(summary.flows, 22);
        assert_eq!(summary.steps, 191);
    }

    #[test]
    fn shipped_catalog_is_valid() {
        assert!(builtin().validate().is_ok());
    }

    #[test]
    fn every_flow_has_steps_and_touchpoints() {
        let catalog = builtin();
        for role in &catalog.roles {
            assert!(!role.flows.is_empty(), "role {} has no flows", role.id);
            for flow in &role.flows {
                assert!(!flow.steps.is_empty(), "flow {} has no steps", flow.id);
                assert!(
                    !flow.touchpoints.is_empty(),
                    "flow {} has no touchpoints",
                    flow.id
                );
                assert!(!flow.story.is_empty(), "flow {} has no story", flow.id);
            }
        }
    }

    #[test]
    fn role_order_matches_the_documentation() {
        let catalog = builtin();
        let ids: Vec<&str> = catalog.roles.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["administrator", "teacher", "backoffice", "parent", "child"]
        );
    }
}
