//! Sales teams with their members

use dealboard_domain::{Department, Employee, SalesTeam, TeamMember};
use tracing::warn;

/// One team per department, in the order given.
///
/// The department head (matched on `UF_HEAD`) is listed with a `null`
/// position, and `head` is the first member without a position. A member
/// with no `WORK_POSITION` at all can therefore be reported as head; that
/// case is logged.
#[must_use]
pub fn build_sales_teams(departments: &[Department], employees: &[Employee]) -> Vec<SalesTeam> {
    departments
        .iter()
        .map(|department| {
            let mut explicit_head: Option<String> = None;
            let members: Vec<TeamMember> = employees
                .iter()
                .filter(|employee| employee.belongs_to(department.id))
                .map(|employee| {
                    let name = employee.full_name();
                    let is_head = department.head_id == Some(employee.id);
                    if is_head && explicit_head.is_none() {
                        explicit_head = Some(name.clone());
                    }
                    TeamMember {
                        name,
                        position: if is_head { None } else { employee.work_position.clone() },
                    }
                })
                .collect();

            let head = members
                .iter()
                .find(|member| member.position.is_none())
                .map(|member| member.name.clone());

            if head != explicit_head {
                warn!(
                    department_id = department.id,
                    head = ?head,
                    explicit_head = ?explicit_head,
                    "Team head resolved from a member without a position"
                );
            }

            SalesTeam {
                team_name: department.name.clone().unwrap_or_default(),
                head,
                members,
            }
        })
        .collect()
}
