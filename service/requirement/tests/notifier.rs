use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};

use domain_requirement::{
    mock::MockRequirementObserver,
    model::vo::NotificationPayload,
    service::{RequirementNotifier, RequirementObserver},
};
use service_requirement::{ActionLogObserver, RequirementNotifierImpl};
use uuid::Uuid;

fn payload() -> NotificationPayload {
    NotificationPayload::Email {
        requirement_id: Uuid::new_v4(),
        to: "ana@example.com".to_string(),
        subject: "Requirement Assigned".to_string(),
        content: "You have been assigned to the requirement: Printer.".to_string(),
    }
}

#[tokio::test]
async fn test_failing_observer_does_not_stop_delivery() {
    let delivered = Arc::new(AtomicUsize::new(0));

    let mut failing = MockRequirementObserver::new();
    failing.expect_name().return_const("failing");
    failing
        .expect_update()
        .times(1)
        .returning(|_, _| Err(anyhow::anyhow!("smtp down")));

    let mut working = MockRequirementObserver::new();
    working.expect_name().return_const("working");
    let counter = delivered.clone();
    working.expect_update().times(1).returning(move |message, _| {
        assert_eq!(message, "Requirement Assigned");
        counter.fetch_add(1, Ordering::SeqCst);
        Ok(())
    });

    let notifier = RequirementNotifierImpl::builder()
        .observers(vec![
            Arc::new(failing) as Arc<dyn RequirementObserver>,
            Arc::new(working),
            Arc::new(ActionLogObserver),
        ])
        .build();
    notifier.notify_all("Requirement Assigned", &payload()).await;

    assert_eq!(delivered.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_observers_run_in_order() {
    let order = Arc::new(std::sync::Mutex::new(vec![]));
    let mut observers: Vec<Arc<dyn RequirementObserver>> = vec![];
    for name in ["first", "second", "third"] {
        let mut observer = MockRequirementObserver::new();
        observer.expect_name().return_const(name);
        let order = order.clone();
        observer.expect_update().returning(move |_, _| {
            order.lock().unwrap().push(name);
            Ok(())
        });
        observers.push(Arc::new(observer));
    }

    let notifier = RequirementNotifierImpl::builder().observers(observers).build();
    notifier.notify_all("Requirement Updated", &payload()).await;

    assert_eq!(*order.lock().unwrap(), vec!["first", "second", "third"]);
}
