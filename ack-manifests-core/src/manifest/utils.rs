use kube::CustomResourceExt;
use kube::core::crd::merge_crds;

use crate::manifest::v1alpha1::{
    db_cluster::DBCluster,
    db_cluster_parameter_group::DBClusterParameterGroup,
    db_instance::DBInstance,
    db_parameter_group::DBParameterGroup,
    db_proxy::DBProxy,
    db_subnet_group::DBSubnetGroup,
    global_cluster::GlobalCluster,
};


/// Generate the CRDs for every supported resource kind
pub fn generate_crds() {
    for crd in vec![
        merge_crds(vec![DBCluster::crd()], "v1alpha1").expect("failed to merge DBCluster CRDs"),
        merge_crds(vec![DBClusterParameterGroup::crd()], "v1alpha1").expect("failed to merge DBClusterParameterGroup CRDs"),
        merge_crds(vec![DBInstance::crd()], "v1alpha1").expect("failed to merge DBInstance CRDs"),
        merge_crds(vec![DBParameterGroup::crd()], "v1alpha1").expect("failed to merge DBParameterGroup CRDs"),
        merge_crds(vec![DBProxy::crd()], "v1alpha1").expect("failed to merge DBProxy CRDs"),
        merge_crds(vec![DBSubnetGroup::crd()], "v1alpha1").expect("failed to merge DBSubnetGroup CRDs"),
        merge_crds(vec![GlobalCluster::crd()], "v1alpha1").expect("failed to merge GlobalCluster CRDs"),
    ] {
        println!("---");
        println!("{}", serde_norway::to_string(&crd).unwrap());
    }
}
