use tree_containers::{Error, Queue, Stack, Vector};

#[test]
fn queue_is_fifo() {
    let mut queue = Queue::new();
    queue.insert_many_back(1..=3);

    assert_eq!(queue.front(), Ok(&1));
    assert_eq!(queue.back(), Ok(&3));
    assert_eq!(queue.pop(), Ok(1));
    assert_eq!(queue.len(), 2);

    let copy = queue.clone();
    assert_eq!(queue.pop(), Ok(2));
    assert_eq!(queue.pop(), Ok(3));
    assert_eq!(queue.pop(), Err(Error::Empty));
    assert_eq!(copy.iter().collect::<Vec<_>>(), [&2, &3]);
}

#[test]
fn stack_is_lifo() {
    let mut stack = Stack::new();
    stack.insert_many_back(vec!['a', 'b', 'c']);

    assert_eq!(stack.top(), Ok(&'c'));
    *stack.top_mut().unwrap() = 'z';
    assert_eq!(stack.iter().collect::<String>(), "zba");

    let mut other = Stack::from(['x']);
    stack.swap(&mut other);
    assert_eq!(stack.len(), 1);
    assert_eq!(other.len(), 3);
    assert_eq!(stack.pop(), Ok('x'));
    assert_eq!(stack.top(), Err(Error::Empty));
}

#[test]
fn vector_doubles_capacity() {
    let mut vector = Vector::new();
    let mut capacities = vec![];

    for i in 0..9 {
        vector.push_back(i);
        capacities.push(vector.capacity());
    }

    assert_eq!(capacities, [1, 2, 4, 4, 8, 8, 8, 8, 16]);

    let mut sized: Vector<u8> = Vector::with_len(3);
    assert_eq!(sized.capacity(), 3);
    sized.push_back(1);
    assert_eq!(sized.capacity(), 6);

    sized.shrink_to_fit();
    assert_eq!(sized.capacity(), 4);
}

#[test]
fn vector_reserve_limits() {
    let mut vector: Vector<u64> = Vector::new();
    let max = vector.max_size();

    assert_eq!(max, isize::MAX as usize / 8);
    assert_eq!(vector.reserve(max + 1), Err(Error::CapacityOverflow { requested: max + 1, max: max }));
    assert_eq!(vector.capacity(), 0);

    vector.reserve(16).unwrap();
    vector.reserve(4).unwrap();
    assert_eq!(vector.capacity(), 16);
    assert_eq!(Vector::<()>::new().max_size(), usize::MAX);
}

#[test]
fn vector_positions() {
    let mut vector = Vector::from([10, 20, 30]);

    assert_eq!(vector.insert(3, 40), Ok(3));
    assert_eq!(vector.insert(5, 50), Err(Error::OutOfRange { index: 5, len: 4 }));
    assert_eq!(vector.erase(0), Ok(10));
    assert_eq!(vector.erase(3), Err(Error::OutOfRange { index: 3, len: 3 }));
    assert_eq!(vector.insert_many(1, vec![21, 22]), Ok(3));
    assert_eq!(vector.data(), [20, 21, 22, 30, 40]);

    *vector.at_mut(0).unwrap() += 1;
    vector[1] += 1;
    assert_eq!(vector.front(), Ok(&21));
    assert_eq!(vector.back(), Ok(&40));
    assert_eq!(vector.data()[..2], [21, 22]);
    assert_eq!(vector.iter().sum::<i32>(), 21 + 22 + 22 + 30 + 40);

    vector.clear();
    assert_eq!(vector.pop_back(), Err(Error::Empty));
    assert_eq!(vector.front(), Err(Error::Empty));
    assert!(vector.capacity() >= 5);
}

#[test]
#[should_panic(expected = "index 5 out of range for length 3")]
fn vector_index_panics() {
    let vector = Vector::from([1, 2, 3]);
    let _value = vector[5];
}
