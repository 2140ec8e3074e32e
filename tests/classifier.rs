
#[cfg(test)]
mod tests {
    use super::test_data::{accuracy, init_tracing};
    use neighbours::{
        classifier::params::ClassifierParamsBuilder, distance, kernel, test_data::blobs,
        KnnClassifier, NeighbourModel, NeighboursError,
    };
    use ndarray::{array, s, Array1, Array2, Axis};

    fn iris_like() -> (Array2<f64>, Array1<usize>) {
        let centers = array![
            [5.0, 3.4, 1.5, 0.2],
            [5.9, 2.8, 4.3, 1.3],
            [6.6, 3.0, 5.6, 2.0],
        ];
        blobs(50, centers.view(), 0.4, 42)
    }

    /// Interleaves the classes so a contiguous slice is a stratified split.
    fn shuffled_split() -> (Array2<f64>, Array1<usize>, Array2<f64>, Array1<usize>) {
        let (x, y) = iris_like();
        let order: Vec<usize> = (0..50).flat_map(|i| [i, 50 + i, 100 + i]).collect();
        let x = x.select(Axis(0), &order);
        let y = y.select(Axis(0), &order);
        (
            x.slice(s![15.., ..]).to_owned(),
            y.slice(s![15..]).to_owned(),
            x.slice(s![..15, ..]).to_owned(),
            y.slice(s![..15]).to_owned(),
        )
    }

    #[test]
    fn test_classifier_separates_blobs() {
        init_tracing();
        let (x_train, y_train, x_test, y_test) = shuffled_split();
        let params = ClassifierParamsBuilder::new(4, 3)
            .trees_count(10)
            .max_leaf_size(7)
            .seed(42)
            .build();
        let mut classifier = KnnClassifier::new(params).unwrap();
        classifier.load(x_train.view(), y_train.view()).unwrap();

        let preds = classifier
            .predict_batch(x_test.view(), distance::euclidean, kernel::gaussian, 1.0)
            .unwrap();
        let acc = accuracy(preds.view(), y_test.view());
        println!("accuracy: {:?}", acc);
        assert!(acc >= 0.9, "accuracy {} too low", acc);
    }

    #[test]
    fn test_batch_matches_single_predictions() {
        let (x_train, y_train, x_test, _) = shuffled_split();
        let mut classifier = KnnClassifier::new(ClassifierParamsBuilder::new(4, 3).build()).unwrap();
        classifier.load(x_train.view(), y_train.view()).unwrap();

        let batch = classifier
            .predict_batch(x_test.view(), distance::manhattan, kernel::epanechnikov, 3.0)
            .unwrap();
        for (i, row) in x_test.axis_iter(Axis(0)).enumerate() {
            let single = classifier
                .predict(row, distance::manhattan, kernel::epanechnikov, 3.0)
                .unwrap();
            assert_eq!(batch[i], single);
        }
    }

    #[test]
    fn test_same_seed_same_votes() {
        let (x_train, y_train, x_test, _) = shuffled_split();
        let params = ClassifierParamsBuilder::new(4, 3).seed(3).build();

        let mut classifier1 = KnnClassifier::new(params.clone()).unwrap();
        let mut classifier2 = KnnClassifier::new(params).unwrap();
        classifier1.load(x_train.view(), y_train.view()).unwrap();
        classifier2.load(x_train.view(), y_train.view()).unwrap();

        for row in x_test.axis_iter(Axis(0)) {
            let votes1 = classifier1
                .votes(row, distance::euclidean, kernel::gaussian, 2.0)
                .unwrap();
            let votes2 = classifier2
                .votes(row, distance::euclidean, kernel::gaussian, 2.0)
                .unwrap();
            assert_eq!(votes1, votes2);
        }
    }

    #[test]
    fn test_single_leaf_majority_vote() {
        let params = ClassifierParamsBuilder::new(1, 2)
            .trees_count(1)
            .max_leaf_size(10)
            .build();
        let mut classifier = KnnClassifier::new(params).unwrap();
        classifier
            .load(array![[0.0], [1.0], [2.0]].view(), array![0, 1, 0].view())
            .unwrap();

        let class = classifier
            .predict(array![1.0].view(), distance::euclidean, |_| 1.0, 1.0)
            .unwrap();
        assert_eq!(class, 0);
    }

    #[test]
    fn test_dimension_mismatch_keeps_loaded_model() {
        let (x_train, y_train, x_test, _) = shuffled_split();
        let mut classifier = KnnClassifier::new(ClassifierParamsBuilder::new(4, 3).build()).unwrap();
        classifier.load(x_train.view(), y_train.view()).unwrap();
        let before = classifier
            .predict_batch(x_test.view(), distance::euclidean, kernel::gaussian, 1.0)
            .unwrap();

        let narrow = x_train.slice(s![.., ..3]);
        let err = classifier.load(narrow, y_train.view()).unwrap_err();
        assert!(err.is_invalid_dimension());
        assert_eq!(
            err.to_string(),
            "invalid number of features in sample (expected 4, got 3)"
        );

        let after = classifier
            .predict_batch(x_test.view(), distance::euclidean, kernel::gaussian, 1.0)
            .unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_batch_fails_on_unloaded_model() {
        let classifier = KnnClassifier::new(ClassifierParamsBuilder::new(2, 2).build()).unwrap();
        let err = classifier
            .predict_batch(
                Array2::zeros((3, 2)).view(),
                distance::euclidean,
                kernel::gaussian,
                1.0,
            )
            .unwrap_err();
        assert_eq!(err, NeighboursError::NotLoaded);
    }
}
