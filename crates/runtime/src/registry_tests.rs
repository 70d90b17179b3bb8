use super::*;
use ag_core::test_support::ScriptedAction;
use std::sync::Arc;

#[test]
fn action_registry_resolves_by_id() {
    let mut registry: ActionRegistry = ActionRegistry::new();
    let action: Arc<dyn Action> = Arc::new(ScriptedAction::new("noop"));
    registry.insert(ActionId::new("noop"), action);
    assert!(registry.contains_key(&ActionId::new("noop")));
    assert!(!registry.contains_key(&ActionId::new("missing")));
}

#[test]
fn agent_kind_displays_its_name() {
    let kind = AgentKind::new("worker");
    assert_eq!(kind.to_string(), "worker");
    assert_eq!(kind, AgentKind::new("worker"));
}

struct StubFactory;

impl AgentFactory for StubFactory {
    fn create(&self) -> Box<dyn Agent> {
        Box::new(ag_core::test_support::EchoAgent::default())
    }
}

#[test]
fn agent_registry_resolves_a_factory_by_kind() {
    let mut registry: AgentRegistry = AgentRegistry::new();
    registry.insert(AgentKind::new("echo"), Arc::new(StubFactory));
    let factory = registry.get(&AgentKind::new("echo")).expect("registered");
    let agent = factory.create();
    assert!(agent.state().is_empty());
}
