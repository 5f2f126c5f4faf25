//! The built-in content table, in declaration order.

use crate::library::ContentItem;
use crate::types::ContentType::{self, *};
use crate::types::Difficulty::{self, *};
use crate::types::TierId::{self, *};

type Row = (u32, TierId, &'static str, ContentType, &'static str, u32, Difficulty);

#[rustfmt::skip]
const ROWS: &[Row] = &[
    // T1
    (101, T1, "Shift to Coach", Exercise, "Player-to-Coach Delegation Framework", 45, Core),
    (102, T1, "Motive", Reading, "Leadership Motive - Servant Leadership Primer", 30, Intro),
    (103, T1, "Identity", Tool, "Defining Your Leadership Identity (LIS)", 60, Mastery),
    (104, T1, "Ownership", CaseStudy, "Ownership and Accountability Audit", 50, Core),
    (105, T1, "Boss", Reading, "Relationship with Boss: Managing Upward", 30, Intro),
    (106, T1, "V-B Trust", Reading, "Leading the Way: Go 1st with V-B Trust", 40, Intro),
    (107, T1, "Shift to Coach", RolePlay, "Sim: Delegating a High-Stakes Task", 55, Mastery),
    (108, T1, "Motive", Exercise, "Journal: Motive vs. Reward", 30, Core),
    (109, T1, "Identity", CaseStudy, "Case: Identity Conflict & Team Morale", 60, Mastery),
    (110, T1, "Ownership", Tool, "Accountability Scorecard Setup", 45, Core),
    (111, T1, "Boss", RolePlay, "Sim: Delivering Bad News to Your Boss", 50, Mastery),
    (112, T1, "V-B Trust", Exercise, "Vulnerability Loop Practice", 35, Core),
    (113, T1, "Shift to Coach", CaseStudy, "Case: Over-Involvement Failure", 50, Intro),
    (114, T1, "Identity", Reading, "Article: The Pitfalls of the \"Hero\" Identity", 25, Intro),
    (115, T1, "Ownership", RolePlay, "Sim: Refusing Excuses", 45, Mastery),
    (116, T1, "Motive", CaseStudy, "Case: Purpose vs. Profit Alignment", 60, Mastery),
    (117, T1, "V-B Trust", Tool, "Tool: Trust Building Checklist", 30, Intro),
    (118, T1, "Boss", Exercise, "Journal: Boss Expectation Alignment", 40, Core),
    // T2
    (201, T2, "Goals", Exercise, "Goals & OKR Prioritization Workshop", 60, Mastery),
    (202, T2, "Expectations", Reading, "Setting Clear Expectations Protocol", 25, Intro),
    (203, T2, "Metrics", Tool, "Leading & Lagging Metrics Dashboard Setup", 40, Core),
    (204, T2, "Delegation", Exercise, "Effective Delegation using Delegation Matrix", 45, Core),
    (205, T2, "Meetings", Tool, "Effective Meetings: Decision-Focused Agenda", 30, Intro),
    (206, T2, "Decisions", CaseStudy, "Decision-Making / Problem Solving Framework", 55, Mastery),
    (207, T2, "Goals", Reading, "Article: From Activity to Outcome", 20, Intro),
    (208, T2, "Expectations", Exercise, "Tool: Stakeholder Expectation Mapping", 40, Core),
    (209, T2, "Metrics", CaseStudy, "Case: Metrics Misalignment Disaster", 60, Mastery),
    (210, T2, "Delegation", RolePlay, "Sim: Delegating a Creative Task", 50, Core),
    (211, T2, "Meetings", CaseStudy, "Case: Post-Mortem on a Bad Meeting", 45, Mastery),
    (212, T2, "Decisions", Reading, "Article: When to Use the DICE Model", 30, Intro),
    (213, T2, "Goals", RolePlay, "Sim: Challenging a Vague Goal", 55, Mastery),
    (214, T2, "Expectations", CaseStudy, "Case: The Unspoken Expectation Failure", 45, Intro),
    (215, T2, "Delegation", Tool, "Delegation Audit & Follow-up Checklist", 35, Core),
    (216, T2, "Meetings", Exercise, "Exercise: Defining Meeting Success", 30, Intro),
    // T3
    (301, T3, "1:1s", Tool, "Effective 1:1s: Coaching-First Structure", 30, Core),
    (302, T3, "Coaching", RolePlay, "Practice: GROW Model Coaching Session", 45, Core),
    (303, T3, "Recognition", Reading, "Recognition and Motivation Principles", 25, Intro),
    (304, T3, "Feedback", Exercise, "Delivering Effective Feedback (Radical Candor)", 40, Core),
    (305, T3, "Motivation", CaseStudy, "Intrinsic Motivation and Team Engagement", 50, Mastery),
    (306, T3, "1:1s", CaseStudy, "Case: 1:1s as Performance Intervention", 55, Mastery),
    (307, T3, "Coaching", Reading, "Article: The Non-Directive Coaching Stance", 20, Intro),
    (308, T3, "Recognition", Exercise, "Tool: Customizing Recognition", 35, Core),
    (309, T3, "Feedback", RolePlay, "Sim: Receiving and Processing Tough Feedback", 45, Mastery),
    (310, T3, "Motivation", Tool, "Motivation Diagnostic Checklist", 30, Intro),
    (311, T3, "1:1s", Reading, "Article: Frequency vs. Quality in 1:1s", 25, Intro),
    (312, T3, "Coaching", CaseStudy, "Case: When Coaching Fails to Motivate", 60, Mastery),
    // T4
    (401, T4, "Conflict", Exercise, "Conflict Management Style Quiz & Strategy", 30, Core),
    (402, T4, "Commitment", Tool, "Team Health: Consensual Commitment Framework", 40, Core),
    (403, T4, "Accountability", Exercise, "Team Health: Peer Accountability Implementation", 55, Mastery),
    (404, T4, "Crucial", RolePlay, "Crucial Conversations / Conflict Mgmt Practice", 60, Mastery),
    (405, T4, "Trust", CaseStudy, "Team Health: Repairing V-B Trust", 45, Intro),
    (406, T4, "Conflict", Reading, "Article: The Value of Productive Conflict", 20, Intro),
    (407, T4, "Commitment", CaseStudy, "Case: Ambiguity and Failure to Commit", 50, Mastery),
    (408, T4, "Accountability", Reading, "Article: The Link Between Ownership and Trust", 25, Intro),
    (409, T4, "Crucial", Exercise, "Tool: Conflict Resolution Scripting", 35, Core),
    (410, T4, "Trust", Tool, "Trust Builder Team Exercise", 40, Core),
    (411, T4, "Conflict", CaseStudy, "Case: Mediating Personality Clashes", 55, Mastery),
    (412, T4, "Commitment", Reading, "Article: The Two Types of Buy-In", 20, Intro),
    // T5
    (501, T5, "Vision", Exercise, "Vision Statement Workshop", 45, Core),
    (502, T5, "Strategic", Tool, "Pre-Mortem Risk Audit", 30, Mastery),
    (503, T5, "Planning", Reading, "Long-Range Strategic Planning Principles", 40, Intro),
    (504, T5, "Vision", CaseStudy, "Case: Communicating Vision in Crisis", 50, Mastery),
    (505, T5, "Strategic", Reading, "Article: Cascading Goals Downstream", 25, Intro),
    (506, T5, "Planning", Exercise, "Tool: Defining Strategic Pillars", 35, Core),
    (507, T5, "Vision", Tool, "Vision Alignment Diagnostic", 30, Core),
    (508, T5, "Strategic", Exercise, "Exercise: Scenario Planning", 60, Mastery),
    (509, T5, "Planning", CaseStudy, "Case: Resource Allocation Failure", 45, Intro),
];

pub(crate) fn builtin_items() -> Vec<ContentItem> {
    ROWS.iter()
        .map(
            |&(id, tier, skill, content_type, title, duration, difficulty)| ContentItem {
                id,
                tier,
                skill: skill.to_string(),
                content_type,
                title: title.to_string(),
                duration,
                difficulty,
            },
        )
        .collect()
}
